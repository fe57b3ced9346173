//! Style tokens for the sub-elements of a picker field.

use ratatui::style::{Color, Modifier, Style};

use crate::config::ThemeConfig;
use crate::utils::color::parse_theme_color;

/// Flags the stylesheet keys its choice on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldState {
    pub has_error: bool,
    pub disabled: bool,
}

/// A normal and an error rendering of one sub-element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StyleVariant {
    pub normal: Style,
    pub error: Style,
}

impl StyleVariant {
    pub fn new(normal: Style, error: Style) -> Self {
        Self { normal, error }
    }

    pub fn pick(&self, has_error: bool) -> Style {
        if has_error {
            self.error
        } else {
            self.normal
        }
    }
}

/// Styles chosen for one render pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolvedStyles {
    pub form_group: Style,
    pub control_label: Style,
    pub datepicker: Style,
    pub date_value: Style,
    pub help_block: Style,
    pub error_block: Style,
}

/// Supplies style tokens for a field state.
///
/// The field treats the result as opaque and only places each token on
/// the matching sub-element.
pub trait Stylesheet {
    fn resolve(&self, state: FieldState) -> ResolvedStyles;
}

/// Stylesheet with a [`StyleVariant`] per sub-element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSet {
    pub form_group: StyleVariant,
    pub control_label: StyleVariant,
    pub datepicker: StyleVariant,
    pub date_value: StyleVariant,
    pub help_block: StyleVariant,
    pub error_block: StyleVariant,
    /// Applied on top of the value styles while the field is disabled
    pub disabled: Style,
}

impl Default for StyleSet {
    fn default() -> Self {
        Self::from_colors(Color::White, Color::Red, Color::Gray, Color::Cyan)
    }
}

impl StyleSet {
    fn from_colors(text: Color, error: Color, muted: Color, value: Color) -> Self {
        let error_style = Style::default().fg(error);
        Self {
            form_group: StyleVariant::new(Style::default().fg(muted), error_style),
            control_label: StyleVariant::new(
                Style::default().fg(text).add_modifier(Modifier::BOLD),
                error_style.add_modifier(Modifier::BOLD),
            ),
            datepicker: StyleVariant::new(Style::default().fg(muted), error_style),
            date_value: StyleVariant::new(Style::default().fg(value), error_style),
            help_block: StyleVariant::new(
                Style::default().fg(muted).add_modifier(Modifier::ITALIC),
                error_style.add_modifier(Modifier::ITALIC),
            ),
            error_block: StyleVariant::new(error_style, error_style.add_modifier(Modifier::BOLD)),
            disabled: Style::default().add_modifier(Modifier::DIM),
        }
    }

    /// Build a style set from theme color names
    pub fn from_theme(theme: &ThemeConfig) -> anyhow::Result<Self> {
        let color = |name: &str| {
            parse_theme_color(name).ok_or_else(|| anyhow::anyhow!("Unknown theme color '{}'", name))
        };
        Ok(Self::from_colors(
            color(&theme.text)?,
            color(&theme.error)?,
            color(&theme.muted)?,
            color(&theme.value)?,
        ))
    }
}

impl Stylesheet for StyleSet {
    fn resolve(&self, state: FieldState) -> ResolvedStyles {
        let has_error = state.has_error;
        let mut date_value = self.date_value.pick(has_error);
        if state.disabled && !has_error {
            date_value = date_value.patch(self.disabled);
        }

        ResolvedStyles {
            form_group: self.form_group.pick(has_error),
            control_label: self.control_label.pick(has_error),
            datepicker: self.datepicker.pick(has_error),
            date_value,
            help_block: self.help_block.pick(has_error),
            error_block: self.error_block.pick(has_error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_flag_selects_error_variant_everywhere() {
        let sheet = StyleSet::default();
        let resolved = sheet.resolve(FieldState {
            has_error: true,
            disabled: false,
        });
        assert_eq!(resolved.form_group, sheet.form_group.error);
        assert_eq!(resolved.control_label, sheet.control_label.error);
        assert_eq!(resolved.datepicker, sheet.datepicker.error);
        assert_eq!(resolved.date_value, sheet.date_value.error);
        assert_eq!(resolved.help_block, sheet.help_block.error);
        assert_eq!(resolved.error_block, sheet.error_block.error);
    }

    #[test]
    fn test_disabled_dims_value_only() {
        let sheet = StyleSet::default();
        let resolved = sheet.resolve(FieldState {
            has_error: false,
            disabled: true,
        });
        assert!(resolved.date_value.add_modifier.contains(Modifier::DIM));
        assert_eq!(resolved.control_label, sheet.control_label.normal);
    }

    #[test]
    fn test_from_theme_rejects_unknown_color() {
        let theme = ThemeConfig {
            error: "blood".to_string(),
            ..ThemeConfig::default()
        };
        assert!(StyleSet::from_theme(&theme).is_err());
    }
}
