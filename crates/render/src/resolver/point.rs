use super::{ResolverOptions, StyleKey, StyleResolver, apply_geometry_function, cached};
use crate::drawable::{Fill, Icon, Image, Stroke, Style};
use crate::image_cache::ImageState;
use crate::paint::{self, DEFAULT_FILL_COLOR, FeatureContext};
use crate::placeholders::{EMPTY_STYLE, IMAGE_ERROR_STYLE, IMAGE_LOADING_STYLE};
use crate::wellknown::{WellKnownName, mark_image};
use sldreader_style::{Graphic, Mark, PointSymbolizer, Template, is_dynamic};
use sldreader_traits::ImageSize;
use sldreader_types::{Color, DirectPropertyGetter, Feature, PropertyGetter};

impl StyleResolver {
    /// Resolves a point symbolizer for `feature`.
    ///
    /// A symbolizer without a graphic draws nothing. An external graphic
    /// that is still loading, or failed to load, resolves to a shared
    /// placeholder style.
    pub fn point_style(
        &mut self,
        symbolizer: &PointSymbolizer,
        feature: &dyn Feature,
        getter: Option<&dyn PropertyGetter>,
    ) -> &Style {
        let Some(graphic) = symbolizer.graphic.as_ref() else {
            return &EMPTY_STYLE;
        };
        let Self {
            options,
            styles,
            images,
        } = self;
        let options: &ResolverOptions = options;
        let ctx = FeatureContext::new(feature, getter);

        let style = match graphic.online_resource() {
            Some(online_resource) => {
                let url = resolve_url(online_resource, feature, getter);
                let size = match images.request(&url) {
                    ImageState::Loaded(size) => *size,
                    ImageState::Pending => return &IMAGE_LOADING_STYLE,
                    ImageState::Error(_) => return &IMAGE_ERROR_STYLE,
                };
                let key = StyleKey {
                    symbolizer: symbolizer.id,
                    graphic: Some(url.clone()),
                };
                cached(styles, key, || icon_style(graphic, url, size, options))
            }
            None => cached(styles, StyleKey::symbolizer(symbolizer.id), || {
                mark_style(graphic, options)
            }),
        };

        // A previous feature may have left a derived point behind.
        style.set_geometry(None);

        let mark_name = mark_name(graphic.mark.as_ref(), options);
        let size = || {
            positive_or(
                ctx.number(graphic.size.as_ref(), options.default_mark_size),
                options.default_mark_size,
            )
        };

        if is_dynamic(graphic.size.as_ref()) {
            let size = size();
            match style.image.as_mut() {
                Some(Image::Icon(icon)) => {
                    let scale = size / icon.size.height;
                    icon.set_scale(Some(positive_or(scale, 1.0)));
                }
                Some(Image::Circle(circle)) => circle.set_radius(size / 2.0),
                // Regular shapes cannot be resized in place.
                Some(image) => {
                    *image = mark_image(
                        mark_name,
                        size,
                        image.fill().cloned(),
                        image.stroke().cloned(),
                        image.rotation(),
                    );
                }
                None => {}
            }
        }

        if is_dynamic(graphic.rotation.as_ref())
            && let Some(image) = style.image.as_mut()
        {
            image.set_rotation(ctx.number(graphic.rotation.as_ref(), 0.0).to_radians());
        }

        if !apply_geometry_function(style, symbolizer.geometry, feature) {
            return style;
        }

        if let Some(mark) = &graphic.mark
            && let Some(image) = style.image.as_mut()
            && !matches!(image, Image::Icon(_))
        {
            let mut fill = image.fill().cloned();
            let mut stroke = image.stroke().cloned();
            let stroke_changed =
                paint::apply_dynamic_stroke(&mut stroke, mark.stroke.as_ref(), ctx);
            let fill_changed = paint::apply_dynamic_fill(&mut fill, mark.fill.as_ref(), ctx);
            if stroke_changed || fill_changed {
                *image = mark_image(mark_name, size(), fill, stroke, image.rotation());
            }
        }

        style
    }
}

/// Substitutes the feature's properties into a templated url. The
/// symbolizer keeps the template, so every call starts from it.
fn resolve_url(
    online_resource: &str,
    feature: &dyn Feature,
    getter: Option<&dyn PropertyGetter>,
) -> String {
    match Template::parse(online_resource) {
        Some(template) => template.substitute(feature, getter.unwrap_or(&DirectPropertyGetter)),
        None => online_resource.to_string(),
    }
}

fn positive_or(value: f64, default: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        default
    }
}

fn mark_name(mark: Option<&Mark>, options: &ResolverOptions) -> WellKnownName {
    let Some(name) = mark.and_then(|m| m.well_known_name.as_deref()) else {
        return options.default_mark_name;
    };
    WellKnownName::from_name(name).unwrap_or_else(|| {
        log::warn!(
            "Unknown well-known mark '{}', using '{}'",
            name,
            options.default_mark_name.name()
        );
        options.default_mark_name
    })
}

fn static_rotation(graphic: &Graphic) -> f64 {
    FeatureContext::STATIC
        .number(graphic.rotation.as_ref(), 0.0)
        .to_radians()
}

fn mark_style(graphic: &Graphic, options: &ResolverOptions) -> Style {
    let ctx = FeatureContext::STATIC;
    let size = positive_or(
        ctx.number(graphic.size.as_ref(), options.default_mark_size),
        options.default_mark_size,
    );

    let (fill, stroke) = match &graphic.mark {
        Some(mark) => (
            paint::fill(mark.fill.as_ref(), ctx).or(Some(Fill::new(DEFAULT_FILL_COLOR))),
            paint::stroke(mark.stroke.as_ref(), ctx),
        ),
        // No mark and no external graphic: a gray square with a black outline.
        None => (
            Some(Fill::new(DEFAULT_FILL_COLOR)),
            Some(Stroke::new(Color::BLACK, 1.0)),
        ),
    };

    Style {
        image: Some(mark_image(
            mark_name(graphic.mark.as_ref(), options),
            size,
            fill,
            stroke,
            static_rotation(graphic),
        )),
        ..Default::default()
    }
}

fn icon_style(
    graphic: &Graphic,
    src: String,
    size: ImageSize,
    options: &ResolverOptions,
) -> Style {
    let ctx = FeatureContext::STATIC;
    // Without a size the image is drawn at its natural size.
    let scale = graphic
        .size
        .as_ref()
        .map(|expr| {
            positive_or(
                ctx.number(Some(expr), options.default_mark_size),
                options.default_mark_size,
            ) / size.height
        })
        .filter(|scale| scale.is_finite() && *scale > 0.0);

    Style {
        image: Some(Image::Icon(Icon {
            src,
            scale,
            rotation: static_rotation(graphic),
            opacity: ctx.number(graphic.opacity.as_ref(), 1.0).clamp(0.0, 1.0),
            size,
        })),
        ..Default::default()
    }
}
