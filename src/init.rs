//! Controller initialization sequence
//!
//! Bring-up is a strictly linear walk through [`InitStep`]s. Each step writes
//! one or more registers and some must be followed by a settle delay before
//! the controller accepts further commands.
//!
//! | Step                | Registers                                 | Delay  |
//! |---------------------|-------------------------------------------|--------|
//! | `Reset`             | SWRESET                                   | 150 ms |
//! | `SleepOut`          | SLPOUT                                    | 500 ms |
//! | `FrameRateConfig`   | FRMCTR1, FRMCTR2, FRMCTR3, INVCTR         |        |
//! | `PowerConfig`       | PWCTR1, PWCTR2, PWCTR4, PWCTR5, VMCTR1    |        |
//! | `GammaConfig`       | GMCTRP1, GMCTRN1                          |        |
//! | `OrientationConfig` | MADCTL                                    |        |
//! | `ColorModeConfig`   | INVON/INVOFF, COLMOD, CASET, RASET        |        |
//! | `NormalMode`        | NORON                                     | 10 ms  |
//! | `DisplayOn`         | DISPON                                    | 100 ms |

use embedded_hal::delay::DelayNs;

use crate::command::{
    CASET, COLMOD, COLMOD_16BIT, DISPON, FRMCTR1, FRMCTR2, FRMCTR3, GMCTRN1, GMCTRP1, INVCTR,
    INVOFF, INVON, MADCTL, NORON, PWCTR1, PWCTR2, PWCTR4, PWCTR5, RAMWR, RASET, SLPOUT, SWRESET,
    VMCTR1,
};
use crate::config::Config;
use crate::framebuffer::Window;
use crate::interface::DisplayInterface;
use crate::rotation::Geometry;

/// One stage of controller bring-up
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitStep {
    /// Software reset
    Reset,
    /// Leave sleep mode
    SleepOut,
    /// Frame rate and inversion control
    FrameRateConfig,
    /// Power and VCOM control
    PowerConfig,
    /// Gamma correction tables
    GammaConfig,
    /// Memory access order (rotation)
    OrientationConfig,
    /// Inversion, pixel format and full-screen address window
    ColorModeConfig,
    /// Normal display mode
    NormalMode,
    /// Display output on
    DisplayOn,
}

impl InitStep {
    /// Step that follows this one, `None` after `DisplayOn`
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Reset => Some(Self::SleepOut),
            Self::SleepOut => Some(Self::FrameRateConfig),
            Self::FrameRateConfig => Some(Self::PowerConfig),
            Self::PowerConfig => Some(Self::GammaConfig),
            Self::GammaConfig => Some(Self::OrientationConfig),
            Self::OrientationConfig => Some(Self::ColorModeConfig),
            Self::ColorModeConfig => Some(Self::NormalMode),
            Self::NormalMode => Some(Self::DisplayOn),
            Self::DisplayOn => None,
        }
    }

    /// Milliseconds to wait after the step's register writes
    pub fn settle_ms(self) -> u32 {
        match self {
            Self::Reset => 150,
            Self::SleepOut => 500,
            Self::NormalMode => 10,
            Self::DisplayOn => 100,
            _ => 0,
        }
    }

    /// Write the step's registers
    pub fn apply<I: DisplayInterface>(
        self,
        interface: &mut I,
        config: &Config,
        geometry: &Geometry,
    ) -> Result<(), I::Error> {
        match self {
            Self::Reset => interface.write_register(SWRESET, &[]),
            Self::SleepOut => interface.write_register(SLPOUT, &[]),
            Self::FrameRateConfig => {
                interface.write_register(FRMCTR1, &config.frame_rate_normal)?;
                interface.write_register(FRMCTR2, &config.frame_rate_idle)?;
                interface.write_register(FRMCTR3, &config.frame_rate_partial)?;
                interface.write_register(INVCTR, &[config.inversion_control])
            }
            Self::PowerConfig => {
                interface.write_register(PWCTR1, &config.power_control1)?;
                interface.write_register(PWCTR2, &config.power_control2)?;
                interface.write_register(PWCTR4, &config.power_control4)?;
                interface.write_register(PWCTR5, &config.power_control5)?;
                interface.write_register(VMCTR1, &[config.vcom])
            }
            Self::GammaConfig => {
                interface.write_register(GMCTRP1, &config.gamma_positive)?;
                interface.write_register(GMCTRN1, &config.gamma_negative)
            }
            Self::OrientationConfig => interface.write_register(MADCTL, &[geometry.madctl]),
            Self::ColorModeConfig => {
                let inversion = if config.invert_colors { INVON } else { INVOFF };
                interface.write_register(inversion, &[])?;
                interface.write_register(COLMOD, &[COLMOD_16BIT])?;
                let full = Window::new(
                    0,
                    0,
                    geometry.width.saturating_sub(1),
                    geometry.height.saturating_sub(1),
                );
                set_address(interface, geometry, full)
            }
            Self::NormalMode => interface.write_register(NORON, &[]),
            Self::DisplayOn => interface.write_register(DISPON, &[]),
        }
    }
}

/// Run the whole bring-up sequence
pub fn run<I, D>(
    interface: &mut I,
    config: &Config,
    geometry: &Geometry,
    delay: &mut D,
) -> Result<(), I::Error>
where
    I: DisplayInterface,
    D: DelayNs,
{
    let mut step = Some(InitStep::Reset);
    while let Some(current) = step {
        log::debug!("[ST7735] init step {:?}", current);
        current.apply(interface, config, geometry)?;
        let settle = current.settle_ms();
        if settle > 0 {
            delay.delay_ms(settle);
        }
        step = current.next();
    }
    Ok(())
}

/// Program CASET/RASET for `window`, adding the panel offsets
pub(crate) fn set_address<I: DisplayInterface>(
    interface: &mut I,
    geometry: &Geometry,
    window: Window,
) -> Result<(), I::Error> {
    let [xs_hi, xs_lo] = (window.x0 + geometry.col_offset).to_be_bytes();
    let [xe_hi, xe_lo] = (window.x1 + geometry.col_offset).to_be_bytes();
    let [ys_hi, ys_lo] = (window.y0 + geometry.row_offset).to_be_bytes();
    let [ye_hi, ye_lo] = (window.y1 + geometry.row_offset).to_be_bytes();
    interface.write_register(CASET, &[xs_hi, xs_lo, xe_hi, xe_lo])?;
    interface.write_register(RASET, &[ys_hi, ys_lo, ye_hi, ye_lo])
}

/// Address `window` and stream `pixels` (big-endian RGB565) into it
pub(crate) fn write_window<I: DisplayInterface>(
    interface: &mut I,
    geometry: &Geometry,
    window: Window,
    pixels: &[u8],
) -> Result<(), I::Error> {
    set_address(interface, geometry, window)?;
    interface.write_register(RAMWR, pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Builder, Rotation};
    use crate::testing::{MockInterface, RecordingDelay};
    use alloc::vec;

    fn run_default(rotation: Rotation) -> (MockInterface, RecordingDelay) {
        let config = Builder::new().rotation(rotation).build().unwrap();
        let mut interface = MockInterface::new();
        let mut delay = RecordingDelay::default();
        run(&mut interface, &config, &config.geometry(), &mut delay).unwrap();
        (interface, delay)
    }

    #[test]
    fn test_steps_end_with_display_on() {
        let mut steps = vec![InitStep::Reset];
        while let Some(next) = steps.last().and_then(|step| step.next()) {
            steps.push(next);
        }
        assert_eq!(
            steps,
            vec![
                InitStep::Reset,
                InitStep::SleepOut,
                InitStep::FrameRateConfig,
                InitStep::PowerConfig,
                InitStep::GammaConfig,
                InitStep::OrientationConfig,
                InitStep::ColorModeConfig,
                InitStep::NormalMode,
                InitStep::DisplayOn,
            ]
        );
    }

    #[test]
    fn test_command_order() {
        let (interface, _) = run_default(Rotation::Rotate0);
        assert_eq!(
            interface.commands(),
            vec![
                SWRESET, SLPOUT, FRMCTR1, FRMCTR2, FRMCTR3, INVCTR, PWCTR1, PWCTR2, PWCTR4, PWCTR5,
                VMCTR1, GMCTRP1, GMCTRN1, MADCTL, INVON, COLMOD, CASET, RASET, NORON, DISPON,
            ]
        );
    }

    #[test]
    fn test_settle_delays() {
        let (_, delay) = run_default(Rotation::Rotate0);
        assert_eq!(delay.ms, vec![150, 500, 10, 100]);
    }

    #[test]
    fn test_register_defaults() {
        let (interface, _) = run_default(Rotation::Rotate0);
        assert_eq!(interface.params_of(FRMCTR3), vec![vec![0x01, 0x2C, 0x2D, 0x01, 0x2C, 0x2D]]);
        assert_eq!(interface.params_of(INVCTR), vec![vec![0x07]]);
        assert_eq!(interface.params_of(PWCTR1), vec![vec![0xA2, 0x02, 0x84]]);
        assert_eq!(interface.params_of(VMCTR1), vec![vec![0x0E]]);
        assert_eq!(interface.params_of(COLMOD), vec![vec![0x05]]);
        assert_eq!(interface.params_of(GMCTRP1)[0].len(), 16);
    }

    #[test]
    fn test_orientation_and_full_window() {
        let (interface, _) = run_default(Rotation::Rotate270);
        assert_eq!(interface.params_of(MADCTL), vec![vec![0xA8]]);
        // 160x80 visible, offsets (1, 26)
        assert_eq!(interface.params_of(CASET), vec![vec![0x00, 1, 0x00, 160]]);
        assert_eq!(interface.params_of(RASET), vec![vec![0x00, 26, 0x00, 105]]);
    }

    #[test]
    fn test_inversion_disabled_sends_invoff() {
        let config = Builder::new().invert_colors(false).build().unwrap();
        let mut interface = MockInterface::new();
        let mut delay = RecordingDelay::default();
        run(&mut interface, &config, &config.geometry(), &mut delay).unwrap();

        let commands = interface.commands();
        assert!(commands.contains(&INVOFF));
        assert!(!commands.contains(&INVON));
    }

    #[test]
    fn test_failure_stops_sequence() {
        let config = Builder::new().build().unwrap();
        let mut interface = MockInterface::failing_after(3);
        let mut delay = RecordingDelay::default();
        let result = run(&mut interface, &config, &config.geometry(), &mut delay);

        assert!(result.is_err());
        assert_eq!(interface.commands(), vec![SWRESET, SLPOUT, FRMCTR1]);
        assert_eq!(delay.ms, vec![150, 500]);
    }

    #[test]
    fn test_write_window_offsets() {
        let config = Builder::new().build().unwrap();
        let geometry = config.geometry();
        let mut interface = MockInterface::new();
        write_window(&mut interface, &geometry, Window::new(2, 3, 4, 5), &[0xAA; 18]).unwrap();

        let windows = interface.windows();
        assert_eq!(windows.len(), 1);
        let (x0, y0, x1, y1, pixels) = &windows[0];
        assert_eq!((*x0, *y0, *x1, *y1), (28, 4, 30, 6));
        assert_eq!(pixels.len(), 18);
    }
}
