//! The date picker form field.

use chrono::NaiveDateTime;
use log::{debug, info, warn};

use super::format::{DisplayText, FormatConfig};
use super::mode::{DisplayMode, SubMode};
use super::state::{DialogOutcome, DialogRequest, PickerState, PlatformCapabilities};
use super::style::{FieldState, StyleSet, Stylesheet};
use super::view::{FieldBody, FieldView, Region, StyledText, TapRegion};
use crate::error::FieldError;
use crate::utils::datetime;

pub type ChangeCallback = Box<dyn FnMut(NaiveDateTime)>;
pub type PressCallback = Box<dyn FnMut()>;

/// Everything the host passes to a field on each render
pub struct FieldProps {
    pub value: Option<NaiveDateTime>,
    /// One of "date", "time" or "datetime", checked on every render
    pub mode: String,
    pub label: Option<String>,
    pub help: Option<String>,
    pub error: Option<String>,
    pub has_error: bool,
    pub disabled: bool,
    pub minimum: Option<NaiveDateTime>,
    pub maximum: Option<NaiveDateTime>,
    pub on_change: Option<ChangeCallback>,
    pub on_press: Option<PressCallback>,
    pub config: FormatConfig,
    pub hidden: bool,
    pub stylesheet: Box<dyn Stylesheet>,
}

impl FieldProps {
    pub fn new(mode: impl Into<String>) -> Self {
        Self {
            value: None,
            mode: mode.into(),
            label: None,
            help: None,
            error: None,
            has_error: false,
            disabled: false,
            minimum: None,
            maximum: None,
            on_change: None,
            on_press: None,
            config: FormatConfig::default(),
            hidden: false,
            stylesheet: Box::new(StyleSet::default()),
        }
    }

    pub fn value(mut self, value: NaiveDateTime) -> Self {
        self.value = Some(value);
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Set the error message and mark the field as in error
    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self.has_error = true;
        self
    }

    pub fn has_error(mut self, has_error: bool) -> Self {
        self.has_error = has_error;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn minimum(mut self, minimum: NaiveDateTime) -> Self {
        self.minimum = Some(minimum);
        self
    }

    pub fn maximum(mut self, maximum: NaiveDateTime) -> Self {
        self.maximum = Some(maximum);
        self
    }

    pub fn on_change(mut self, callback: impl FnMut(NaiveDateTime) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn on_press(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_press = Some(Box::new(callback));
        self
    }

    pub fn config(mut self, config: FormatConfig) -> Self {
        self.config = config;
        self
    }

    pub fn stylesheet(mut self, stylesheet: impl Stylesheet + 'static) -> Self {
        self.stylesheet = Box::new(stylesheet);
        self
    }
}

/// A date/time picker field instance.
///
/// Holds the host's props and the transient dialog state. [`render`] is pure
/// and may be called any number of times; only [`tap`] and [`complete`]
/// change state or fire callbacks.
///
/// [`render`]: DatePickerField::render
/// [`tap`]: DatePickerField::tap
/// [`complete`]: DatePickerField::complete
pub struct DatePickerField {
    props: FieldProps,
    state: PickerState,
    platform: PlatformCapabilities,
    clock: fn() -> NaiveDateTime,
}

impl DatePickerField {
    pub fn new(props: FieldProps) -> Self {
        Self {
            props,
            state: PickerState::Hidden,
            platform: PlatformCapabilities::default(),
            clock: datetime::now,
        }
    }

    pub fn with_platform(mut self, platform: PlatformCapabilities) -> Self {
        self.platform = platform;
        self
    }

    /// Replace the source of "now" used when the field has no value
    pub fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    pub fn props(&self) -> &FieldProps {
        &self.props
    }

    pub fn props_mut(&mut self) -> &mut FieldProps {
        &mut self.props
    }

    pub fn value(&self) -> Option<NaiveDateTime> {
        self.props.value
    }

    pub fn set_value(&mut self, value: Option<NaiveDateTime>) {
        self.props.value = value;
    }

    pub fn state(&self) -> &PickerState {
        &self.state
    }

    pub fn platform(&self) -> PlatformCapabilities {
        self.platform
    }

    /// Render the field into a UI tree.
    ///
    /// Returns `Ok(None)` for hidden fields. Fails without producing any UI
    /// when the mode is unknown or the bounds are inverted.
    pub fn render(&self) -> Result<Option<FieldView>, FieldError> {
        let props = &self.props;
        if props.hidden {
            return Ok(None);
        }

        let styles = props.stylesheet.resolve(FieldState {
            has_error: props.has_error,
            disabled: props.disabled,
        });

        let mode: DisplayMode = props.mode.parse()?;
        if let (Some(minimum), Some(maximum)) = (props.minimum, props.maximum) {
            if minimum > maximum {
                return Err(FieldError::InvalidBounds { minimum, maximum });
            }
        }

        let text = DisplayText::compute(props.value.as_ref(), mode, &props.config);

        let label = props
            .label
            .as_ref()
            .map(|label| StyledText::new(label.as_str(), styles.control_label));
        let help = props
            .help
            .as_ref()
            .map(|help| StyledText::new(help.as_str(), styles.help_block));
        let error = match (&props.error, props.has_error) {
            (Some(error), true) => Some(StyledText::new(error.as_str(), styles.error_block)),
            _ => None,
        };

        let body = match mode {
            DisplayMode::DateTime => FieldBody::Split {
                date: TapRegion {
                    region: Region::Date,
                    value: StyledText::new(text.date, styles.date_value),
                },
                time: TapRegion {
                    region: Region::Time,
                    value: StyledText::new(text.time, styles.date_value),
                },
            },
            DisplayMode::Date | DisplayMode::Time => FieldBody::Single(TapRegion {
                region: Region::Single,
                value: StyledText::new(text.combined, styles.date_value),
            }),
        };

        Ok(Some(FieldView {
            form_group_style: styles.form_group,
            container_style: styles.datepicker,
            label,
            body,
            help,
            error,
            interactive: !props.disabled,
            background: props.config.background,
        }))
    }

    /// Handle a tap on one of the field's regions.
    ///
    /// Opens the dialog and returns the request to present it with. Taps on
    /// hidden or disabled fields, and on regions the mode does not have, are
    /// ignored and fire nothing.
    pub fn tap(&mut self, region: Region) -> Option<DialogRequest> {
        let props = &self.props;
        if props.hidden || props.disabled {
            debug!("Ignoring tap on {:?}: field is hidden or disabled", region);
            return None;
        }

        let mode: DisplayMode = match props.mode.parse() {
            Ok(mode) => mode,
            Err(e) => {
                warn!("Ignoring tap on {:?}: {}", region, e);
                return None;
            }
        };

        let sub_mode = match (mode, region) {
            (DisplayMode::DateTime, Region::Date) => SubMode::Date,
            (DisplayMode::DateTime, Region::Time) => SubMode::Time,
            (single, Region::Single) => match single.single_sub_mode() {
                Some(sub_mode) => sub_mode,
                None => return None,
            },
            _ => {
                debug!("Ignoring tap on {:?}: not a region of a {} field", region, mode);
                return None;
            }
        };

        let request = DialogRequest {
            initial: props.value.unwrap_or_else(self.clock),
            sub_mode,
            minimum: props.minimum,
            maximum: props.maximum,
            dialog_mode: props.config.dialog_mode,
        };
        self.state = PickerState::Shown(request);
        debug!("Dialog opened in {:?} sub-mode at {}", sub_mode, request.initial);

        if let Some(on_press) = self.props.on_press.as_mut() {
            on_press();
        }

        Some(request)
    }

    /// Apply the dialog's outcome.
    ///
    /// A selection is merged into the current value, kept within the
    /// bounds, and reported through `on_change`; the merged value is
    /// returned. Cancelling changes nothing
    /// and returns `None`. Outcomes arriving while no dialog is shown are
    /// dropped.
    pub fn complete(&mut self, outcome: DialogOutcome) -> Option<NaiveDateTime> {
        let request = match self.state {
            PickerState::Shown(request) => request,
            PickerState::Hidden => {
                debug!("Dropping dialog outcome {:?}: no dialog is shown", outcome);
                return None;
            }
        };

        match outcome {
            DialogOutcome::Cancelled => {
                debug!("Dialog cancelled");
                self.state = PickerState::Hidden;
                None
            }
            DialogOutcome::Selected(selection) => {
                // Merging restores the other half of the value, which can leave the bounds
                let merged = datetime::clamp_to_bounds(
                    datetime::merge_selection(self.props.value, selection, request.sub_mode, (self.clock)()),
                    request.minimum,
                    request.maximum,
                );
                info!("Date picker value changed to {}", merged);

                if let Some(on_change) = self.props.on_change.as_mut() {
                    on_change(merged);
                }

                self.state = if self.platform.auto_dismiss {
                    PickerState::Hidden
                } else {
                    PickerState::Shown(DialogRequest {
                        initial: merged,
                        ..request
                    })
                };
                Some(merged)
            }
        }
    }
}
