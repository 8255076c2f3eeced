use crate::parser::SldParser;
use crate::util::{attribute, elements, local_name, optional_text, read_expression, skip};
use roxmltree::Node;
use sldreader_style::parsers::camel_case;
use sldreader_style::{
    AnchorPoint, Displacement, Expression, ExternalGraphic, Fill, Font, GeometryFunction, Graphic,
    Halo, LabelPlacement, LinePlacement, LineSymbolizer, Mark, PointPlacement, PointSymbolizer,
    PolygonSymbolizer, Stroke, Styling, TextSymbolizer,
};

impl SldParser {
    pub(crate) fn read_polygon_symbolizer(&mut self, node: Node<'_, '_>) -> PolygonSymbolizer {
        let mut symbolizer = PolygonSymbolizer {
            id: self.next_symbolizer_id(),
            fill: None,
            stroke: None,
        };
        for child in elements(node) {
            match local_name(child) {
                "Fill" => symbolizer.fill = Some(read_fill(child)),
                "Stroke" => symbolizer.stroke = Some(read_stroke(child)),
                _ => skip(child, "PolygonSymbolizer"),
            }
        }
        symbolizer
    }

    pub(crate) fn read_line_symbolizer(&mut self, node: Node<'_, '_>) -> LineSymbolizer {
        let mut symbolizer = LineSymbolizer {
            id: self.next_symbolizer_id(),
            stroke: None,
        };
        for child in elements(node) {
            match local_name(child) {
                "Stroke" => symbolizer.stroke = Some(read_stroke(child)),
                _ => skip(child, "LineSymbolizer"),
            }
        }
        symbolizer
    }

    pub(crate) fn read_point_symbolizer(&mut self, node: Node<'_, '_>) -> PointSymbolizer {
        let mut symbolizer = PointSymbolizer {
            id: self.next_symbolizer_id(),
            graphic: None,
            geometry: None,
        };
        for child in elements(node) {
            match local_name(child) {
                "Graphic" => symbolizer.graphic = Some(read_graphic(child)),
                "Geometry" => symbolizer.geometry = read_geometry(child),
                _ => skip(child, "PointSymbolizer"),
            }
        }
        symbolizer
    }

    pub(crate) fn read_text_symbolizer(&mut self, node: Node<'_, '_>) -> TextSymbolizer {
        let mut symbolizer = TextSymbolizer {
            id: self.next_symbolizer_id(),
            label: None,
            font: None,
            label_placement: None,
            halo: None,
            fill: None,
            geometry: None,
        };
        for child in elements(node) {
            match local_name(child) {
                "Label" => symbolizer.label = read_expression(child),
                "Font" => symbolizer.font = Some(Font { styling: read_styling(child) }),
                "LabelPlacement" => symbolizer.label_placement = Some(read_label_placement(child)),
                "Halo" => symbolizer.halo = Some(read_halo(child)),
                "Fill" => symbolizer.fill = Some(read_fill(child)),
                "Geometry" => symbolizer.geometry = read_geometry(child),
                _ => skip(child, "TextSymbolizer"),
            }
        }
        symbolizer
    }
}

fn read_styling(node: Node<'_, '_>) -> Styling {
    let mut styling = Styling::new();
    for child in elements(node) {
        match local_name(child) {
            "CssParameter" | "SvgParameter" => {
                let Some(name) = attribute(child, "name") else {
                    log::warn!("<{}> without a name attribute ignored", local_name(child));
                    continue;
                };
                if let Some(value) = read_expression(child) {
                    styling.insert(camel_case(name), value);
                }
            }
            _ => skip(child, local_name(node)),
        }
    }
    styling
}

fn read_fill(node: Node<'_, '_>) -> Fill {
    Fill {
        styling: read_styling(node),
    }
}

fn read_stroke(node: Node<'_, '_>) -> Stroke {
    Stroke {
        styling: read_styling(node),
    }
}

fn read_geometry(node: Node<'_, '_>) -> Option<GeometryFunction> {
    let function = elements(node).find(|n| local_name(*n) == "Function")?;
    let name = attribute(function, "name")?;
    let parsed = GeometryFunction::from_name(name);
    if parsed.is_none() {
        log::warn!("Unsupported geometry function '{}'", name);
    }
    parsed
}

fn read_graphic(node: Node<'_, '_>) -> Graphic {
    let mut graphic = Graphic::default();
    for child in elements(node) {
        match local_name(child) {
            "Mark" => graphic.mark = Some(read_mark(child)),
            "ExternalGraphic" => graphic.external_graphic = Some(read_external_graphic(child)),
            "Size" => graphic.size = read_expression(child),
            "Rotation" => graphic.rotation = read_expression(child),
            "Opacity" => graphic.opacity = read_expression(child),
            _ => skip(child, "Graphic"),
        }
    }
    graphic
}

fn read_mark(node: Node<'_, '_>) -> Mark {
    let mut mark = Mark::default();
    for child in elements(node) {
        match local_name(child) {
            "WellKnownName" => mark.well_known_name = optional_text(child),
            "Fill" => mark.fill = Some(read_fill(child)),
            "Stroke" => mark.stroke = Some(read_stroke(child)),
            _ => skip(child, "Mark"),
        }
    }
    mark
}

fn read_external_graphic(node: Node<'_, '_>) -> ExternalGraphic {
    let mut external = ExternalGraphic::default();
    for child in elements(node) {
        match local_name(child) {
            "OnlineResource" => {
                external.online_resource = attribute(child, "href")
                    .map(|href| href.trim().to_string())
                    .or_else(|| optional_text(child));
            }
            "Format" => external.format = optional_text(child),
            _ => skip(child, "ExternalGraphic"),
        }
    }
    external
}

fn read_label_placement(node: Node<'_, '_>) -> LabelPlacement {
    let mut placement = LabelPlacement::default();
    for child in elements(node) {
        match local_name(child) {
            "PointPlacement" => placement.point_placement = Some(read_point_placement(child)),
            "LinePlacement" => {
                placement.line_placement = Some(LinePlacement {
                    perpendicular_offset: elements(child)
                        .find(|n| local_name(*n) == "PerpendicularOffset")
                        .and_then(read_expression),
                });
            }
            _ => skip(child, "LabelPlacement"),
        }
    }
    placement
}

fn read_point_placement(node: Node<'_, '_>) -> PointPlacement {
    let mut placement = PointPlacement::default();
    for child in elements(node) {
        match local_name(child) {
            "AnchorPoint" => {
                let (x, y) = read_pair(child, "AnchorPointX", "AnchorPointY");
                placement.anchor_point = Some(AnchorPoint { x, y });
            }
            "Displacement" => {
                let (x, y) = read_pair(child, "DisplacementX", "DisplacementY");
                placement.displacement = Some(Displacement { x, y });
            }
            "Rotation" => placement.rotation = read_expression(child),
            _ => skip(child, "PointPlacement"),
        }
    }
    placement
}

fn read_pair(
    node: Node<'_, '_>,
    x_name: &str,
    y_name: &str,
) -> (Option<Expression>, Option<Expression>) {
    let read = |name: &str| {
        elements(node)
            .find(|n| local_name(*n) == name)
            .and_then(read_expression)
    };
    (read(x_name), read(y_name))
}

fn read_halo(node: Node<'_, '_>) -> Halo {
    let mut halo = Halo::default();
    for child in elements(node) {
        match local_name(child) {
            "Radius" => halo.radius = read_expression(child),
            "Fill" => halo.fill = Some(read_fill(child)),
            _ => skip(child, "Halo"),
        }
    }
    halo
}

#[cfg(test)]
mod tests {
    use crate::parse;
    use sldreader_style::{Expression, GeometryFunction, Rule};

    fn single_rule(symbolizers: &str) -> Rule {
        let xml = format!(
            r#"<StyledLayerDescriptor version="1.0.0"
                 xmlns="http://www.opengis.net/sld"
                 xmlns:ogc="http://www.opengis.net/ogc"
                 xmlns:xlink="http://www.w3.org/1999/xlink">
               <NamedLayer><Name>l</Name><UserStyle><FeatureTypeStyle><Rule>{}</Rule></FeatureTypeStyle></UserStyle></NamedLayer>
             </StyledLayerDescriptor>"#,
            symbolizers
        );
        let mut sld = parse(&xml).unwrap();
        sld.layers.remove(0).styles.remove(0).feature_type_styles.remove(0).rules.remove(0)
    }

    #[test]
    fn test_polygon_parameters_are_camel_cased() {
        let rule = single_rule(
            r##"<PolygonSymbolizer>
                 <Fill><CssParameter name="fill">#AAAAAA</CssParameter><CssParameter name="fill-opacity">0.5</CssParameter></Fill>
                 <Stroke><SvgParameter name="stroke-width"> 2 </SvgParameter></Stroke>
               </PolygonSymbolizer>"##,
        );
        let polygon = rule.symbolizers.polygon.unwrap();
        let fill = polygon.fill.unwrap();
        assert_eq!(fill.param("fill"), Some(&Expression::string("#AAAAAA")));
        assert_eq!(fill.param("fillOpacity"), Some(&Expression::number(0.5)));
        assert_eq!(
            polygon.stroke.unwrap().param("strokeWidth"),
            Some(&Expression::number(2.0))
        );
    }

    #[test]
    fn test_point_symbolizer_with_external_graphic() {
        let rule = single_rule(
            r#"<PointSymbolizer>
                 <Geometry><ogc:Function name="endPoint"><ogc:PropertyName>geom</ogc:PropertyName></ogc:Function></Geometry>
                 <Graphic>
                   <ExternalGraphic>
                     <OnlineResource xlink:type="simple" xlink:href="http://x/${id}.png"/>
                     <Format>image/png</Format>
                   </ExternalGraphic>
                   <Size><ogc:PropertyName>size</ogc:PropertyName></Size>
                   <Rotation>45</Rotation>
                 </Graphic>
               </PointSymbolizer>"#,
        );
        let point = rule.symbolizers.point.unwrap();
        assert_eq!(point.geometry, Some(GeometryFunction::EndPoint));
        let graphic = point.graphic.unwrap();
        assert_eq!(graphic.online_resource(), Some("http://x/${id}.png"));
        assert_eq!(graphic.size, Some(Expression::property("size")));
        assert_eq!(graphic.rotation, Some(Expression::number(45.0)));
    }

    #[test]
    fn test_text_symbolizer_mixed_label() {
        let rule = single_rule(
            r#"<TextSymbolizer>
                 <Label>Name: <ogc:PropertyName>name</ogc:PropertyName></Label>
                 <Font><CssParameter name="font-family">Arial</CssParameter></Font>
                 <LabelPlacement>
                   <PointPlacement>
                     <AnchorPoint><AnchorPointX>0</AnchorPointX><AnchorPointY>1</AnchorPointY></AnchorPoint>
                     <Rotation><ogc:PropertyName>angle</ogc:PropertyName></Rotation>
                   </PointPlacement>
                 </LabelPlacement>
                 <Halo><Radius>2</Radius><Fill><CssParameter name="fill">#FFFFFF</CssParameter></Fill></Halo>
               </TextSymbolizer>"#,
        );
        let text = rule.symbolizers.text.unwrap();
        assert_eq!(
            text.label,
            Some(Expression::Concat(vec![
                Expression::string("Name: "),
                Expression::property("name"),
            ]))
        );
        let placement = text.point_placement().unwrap();
        assert_eq!(placement.rotation, Some(Expression::property("angle")));
        assert_eq!(
            placement.anchor_point.as_ref().unwrap().y,
            Some(Expression::number(1.0))
        );
        assert_eq!(text.halo.unwrap().radius, Some(Expression::number(2.0)));
    }

    #[test]
    fn test_unknown_elements_are_skipped() {
        let rule = single_rule(
            r#"<VendorOption name="group">yes</VendorOption>
               <LineSymbolizer><Stroke><CssParameter name="stroke">#000000</CssParameter></Stroke></LineSymbolizer>"#,
        );
        assert!(rule.symbolizers.line.is_some());
    }
}
