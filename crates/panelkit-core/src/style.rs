//! Style properties understood by surfaces.
//!
//! The property list lives in one table, [`for_each_style_property!`], which
//! expands into the [`StyleProperty`] enum here and into the shorthand setters
//! on widgets.

/// Invoke `$callback!` with the full style property table.
///
/// Each row is `Variant => "css-name", setter_name;`.
#[macro_export]
macro_rules! for_each_style_property {
    ($callback:ident) => {
        $callback! {
            Position => "position", set_position;
            Left => "left", set_left;
            Top => "top", set_top;
            Right => "right", set_right;
            Bottom => "bottom", set_bottom;
            Width => "width", set_width;
            Height => "height", set_height;
            Border => "border", set_border;
            BorderLeft => "border-left", set_border_left;
            BorderTop => "border-top", set_border_top;
            BorderRight => "border-right", set_border_right;
            BorderBottom => "border-bottom", set_border_bottom;
            BorderColor => "border-color", set_border_color;
            Display => "display", set_display;
            Overflow => "overflow", set_overflow;
            Margin => "margin", set_margin;
            MarginLeft => "margin-left", set_margin_left;
            MarginTop => "margin-top", set_margin_top;
            MarginRight => "margin-right", set_margin_right;
            MarginBottom => "margin-bottom", set_margin_bottom;
            Padding => "padding", set_padding;
            PaddingLeft => "padding-left", set_padding_left;
            PaddingTop => "padding-top", set_padding_top;
            PaddingRight => "padding-right", set_padding_right;
            PaddingBottom => "padding-bottom", set_padding_bottom;
            Color => "color", set_color;
            Background => "background", set_background;
            BackgroundColor => "background-color", set_background_color;
            Opacity => "opacity", set_opacity;
            FontSize => "font-size", set_font_size;
            FontWeight => "font-weight", set_font_weight;
            TextAlign => "text-align", set_text_align;
            TextDecoration => "text-decoration", set_text_decoration;
            TextTransform => "text-transform", set_text_transform;
            Cursor => "cursor", set_cursor;
            ZIndex => "z-index", set_z_index;
            VerticalAlign => "vertical-align", set_vertical_align;
            AlignItems => "align-items", set_align_items;
            JustifyContent => "justify-content", set_justify_content;
            BoxShadow => "box-shadow", set_box_shadow;
        }
    };
}

macro_rules! define_style_properties {
    ($($variant:ident => $css:literal, $setter:ident;)*) => {
        /// A style property a widget can set.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum StyleProperty {
            $($variant,)*
        }

        impl StyleProperty {
            /// Every property, in table order.
            pub const ALL: &'static [StyleProperty] = &[$(StyleProperty::$variant,)*];

            /// The CSS property name (kebab-case).
            pub fn css_name(self) -> &'static str {
                match self {
                    $(StyleProperty::$variant => $css,)*
                }
            }

            /// Look a property up by its CSS name.
            pub fn from_css_name(name: &str) -> Option<Self> {
                match name {
                    $($css => Some(StyleProperty::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

for_each_style_property!(define_style_properties);

impl std::fmt::Display for StyleProperty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.css_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_css_names_are_unique() {
        let names: HashSet<_> = StyleProperty::ALL.iter().map(|p| p.css_name()).collect();
        assert_eq!(names.len(), StyleProperty::ALL.len());
    }

    #[test]
    fn test_css_name_round_trip_lookup() {
        assert_eq!(
            StyleProperty::from_css_name("background-color"),
            Some(StyleProperty::BackgroundColor)
        );
        assert_eq!(StyleProperty::from_css_name("z-index"), Some(StyleProperty::ZIndex));
        assert_eq!(StyleProperty::from_css_name("backgroundColor"), None);
    }

    #[test]
    fn test_display_uses_css_name() {
        assert_eq!(StyleProperty::Cursor.to_string(), "cursor");
        assert_eq!(StyleProperty::MarginLeft.to_string(), "margin-left");
    }
}
