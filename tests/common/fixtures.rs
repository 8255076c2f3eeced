use serde_json::{Value, json};
use sldreader::SimpleFeature;

/// 0.28 m/px, scale 1:1000.
pub const STREET_RESOLUTION: f64 = 0.28;
/// 28 m/px, scale 1:100000.
pub const REGION_RESOLUTION: f64 = 28.0;

/// Roads coloured by category, with an else rule and a street-level label.
pub const ROADS_SLD: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<StyledLayerDescriptor version="1.0.0"
    xmlns="http://www.opengis.net/sld"
    xmlns:ogc="http://www.opengis.net/ogc"
    xmlns:xlink="http://www.w3.org/1999/xlink">
  <NamedLayer>
    <Name>roads</Name>
    <UserStyle>
      <Name>casing</Name>
      <FeatureTypeStyle>
        <Rule>
          <LineSymbolizer><Stroke><CssParameter name="stroke-width">8</CssParameter></Stroke></LineSymbolizer>
        </Rule>
      </FeatureTypeStyle>
    </UserStyle>
    <UserStyle>
      <Name>by-category</Name>
      <IsDefault>1</IsDefault>
      <FeatureTypeStyle>
        <Rule>
          <Name>motorway</Name>
          <ogc:Filter>
            <ogc:PropertyIsEqualTo>
              <ogc:PropertyName>category</ogc:PropertyName>
              <ogc:Literal>A</ogc:Literal>
            </ogc:PropertyIsEqualTo>
          </ogc:Filter>
          <MaxScaleDenominator>50000</MaxScaleDenominator>
          <LineSymbolizer>
            <Stroke>
              <CssParameter name="stroke">#FF0000</CssParameter>
              <CssParameter name="stroke-width">4</CssParameter>
            </Stroke>
          </LineSymbolizer>
        </Rule>
        <Rule>
          <Name>local</Name>
          <ogc:Filter>
            <ogc:Or>
              <ogc:PropertyIsEqualTo>
                <ogc:PropertyName>category</ogc:PropertyName>
                <ogc:Literal>B</ogc:Literal>
              </ogc:PropertyIsEqualTo>
              <ogc:PropertyIsEqualTo>
                <ogc:PropertyName>category</ogc:PropertyName>
                <ogc:Literal>C</ogc:Literal>
              </ogc:PropertyIsEqualTo>
            </ogc:Or>
          </ogc:Filter>
          <LineSymbolizer>
            <Stroke><CssParameter name="stroke">#888888</CssParameter></Stroke>
          </LineSymbolizer>
        </Rule>
        <Rule>
          <Name>other</Name>
          <ElseFilter/>
          <LineSymbolizer>
            <Stroke><CssParameter name="stroke">#CCCCCC</CssParameter></Stroke>
          </LineSymbolizer>
        </Rule>
        <Rule>
          <Name>labels</Name>
          <MaxScaleDenominator>5000</MaxScaleDenominator>
          <TextSymbolizer>
            <Label><ogc:PropertyName>name</ogc:PropertyName></Label>
            <Font>
              <CssParameter name="font-family">Arial</CssParameter>
              <CssParameter name="font-size">11</CssParameter>
            </Font>
            <LabelPlacement><LinePlacement/></LabelPlacement>
            <Halo><Radius>2</Radius></Halo>
          </TextSymbolizer>
        </Rule>
      </FeatureTypeStyle>
    </UserStyle>
  </NamedLayer>
</StyledLayerDescriptor>"#;

/// Points of interest drawn as templated icons, with a mark for unknown kinds.
pub const POI_SLD: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<StyledLayerDescriptor version="1.1.0"
    xmlns="http://www.opengis.net/sld"
    xmlns:se="http://www.opengis.net/se"
    xmlns:ogc="http://www.opengis.net/ogc"
    xmlns:xlink="http://www.w3.org/1999/xlink">
  <NamedLayer>
    <se:Name>poi</se:Name>
    <UserStyle>
      <IsDefault>true</IsDefault>
      <se:FeatureTypeStyle>
        <se:Rule>
          <se:Name>icons</se:Name>
          <ogc:Filter>
            <ogc:Not>
              <ogc:PropertyIsNull><ogc:PropertyName>kind</ogc:PropertyName></ogc:PropertyIsNull>
            </ogc:Not>
          </ogc:Filter>
          <se:PointSymbolizer>
            <se:Graphic>
              <se:ExternalGraphic>
                <se:OnlineResource xlink:type="simple" xlink:href="http://icons/${kind}.png"/>
                <se:Format>image/png</se:Format>
              </se:ExternalGraphic>
              <se:Size>16</se:Size>
            </se:Graphic>
          </se:PointSymbolizer>
        </se:Rule>
        <se:Rule>
          <se:Name>fallback</se:Name>
          <se:ElseFilter/>
          <se:PointSymbolizer>
            <se:Graphic>
              <se:Mark>
                <se:WellKnownName>circle</se:WellKnownName>
                <se:Fill><se:SvgParameter name="fill"><ogc:PropertyName>color</ogc:PropertyName></se:SvgParameter></se:Fill>
              </se:Mark>
              <se:Size><ogc:PropertyName>size</ogc:PropertyName></se:Size>
            </se:Graphic>
          </se:PointSymbolizer>
        </se:Rule>
      </se:FeatureTypeStyle>
    </UserStyle>
  </NamedLayer>
</StyledLayerDescriptor>"#;

/// Parks with a fill driven by an attribute and an outline at street level.
pub const PARKS_SLD: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<StyledLayerDescriptor version="1.0.0"
    xmlns="http://www.opengis.net/sld"
    xmlns:ogc="http://www.opengis.net/ogc">
  <NamedLayer>
    <Name>parks</Name>
    <UserStyle>
      <IsDefault>1</IsDefault>
      <FeatureTypeStyle>
        <Rule>
          <ogc:Filter>
            <ogc:PropertyIsBetween>
              <ogc:PropertyName>area</ogc:PropertyName>
              <ogc:LowerBoundary><ogc:Literal>1000</ogc:Literal></ogc:LowerBoundary>
              <ogc:UpperBoundary><ogc:Literal>50000</ogc:Literal></ogc:UpperBoundary>
            </ogc:PropertyIsBetween>
          </ogc:Filter>
          <PolygonSymbolizer>
            <Fill>
              <CssParameter name="fill"><ogc:PropertyName>color</ogc:PropertyName></CssParameter>
              <CssParameter name="fill-opacity">0.5</CssParameter>
            </Fill>
            <Stroke><CssParameter name="stroke">#006400</CssParameter></Stroke>
          </PolygonSymbolizer>
          <TextSymbolizer>
            <Label>Park: <ogc:PropertyName>name</ogc:PropertyName></Label>
          </TextSymbolizer>
        </Rule>
      </FeatureTypeStyle>
      <FeatureTypeStyle>
        <Rule>
          <MinScaleDenominator>500</MinScaleDenominator>
          <MaxScaleDenominator>2000</MaxScaleDenominator>
          <PolygonSymbolizer>
            <Stroke>
              <CssParameter name="stroke">#000000</CssParameter>
              <CssParameter name="stroke-dasharray">4 2</CssParameter>
            </Stroke>
          </PolygonSymbolizer>
        </Rule>
      </FeatureTypeStyle>
    </UserStyle>
  </NamedLayer>
</StyledLayerDescriptor>"#;

/// A road feature in GeoJSON form.
pub fn road_json(id: &str, category: &str, name: &str) -> Value {
    json!({
        "type": "Feature",
        "id": id,
        "geometry": {
            "type": "LineString",
            "coordinates": [[0.0, 0.0], [10.0, 0.0], [10.0, 10.0]]
        },
        "properties": { "category": category, "name": name }
    })
}

pub fn road(id: &str, category: &str, name: &str) -> SimpleFeature {
    serde_json::from_value(road_json(id, category, name)).expect("valid road feature")
}

pub fn poi(kind: Option<&str>) -> SimpleFeature {
    let feature = SimpleFeature::new().with_geometry(sldreader::Geometry::Point([1.0, 2.0]));
    match kind {
        Some(kind) => feature.with_property("kind", kind),
        None => feature
            .with_property("color", "#00FF00")
            .with_property("size", 12),
    }
}

pub fn park(area: f64, color: &str) -> SimpleFeature {
    SimpleFeature::new()
        .with_id("park.1")
        .with_geometry(sldreader::Geometry::Polygon(vec![vec![
            [0.0, 0.0],
            [4.0, 0.0],
            [4.0, 4.0],
            [0.0, 4.0],
            [0.0, 0.0],
        ]]))
        .with_property("area", area)
        .with_property("color", color)
        .with_property("name", "Vondelpark")
}
