//! Streaming XML reader for vendor footprint libraries.
//!
//! Walks the document with quick-xml and collects `<package>` elements into
//! typed [`Package`] records. Elements other than the known drawing
//! primitives are skipped, so richer files parse cleanly.

use fanout_core::Point;
use indexmap::IndexMap;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::debug;

use crate::error::LibraryError;
use crate::model::{Package, PadShape, Primitive};

pub(crate) fn parse_packages(content: &str) -> Result<IndexMap<String, Package>, LibraryError> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    let mut packages = IndexMap::new();
    let mut current: Option<Package> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) if e.name().as_ref() == b"package" => {
                current = Some(Package {
                    name: require_attr(e, "name")?,
                    primitives: Vec::new(),
                });
            }
            Event::End(ref e) if e.name().as_ref() == b"package" => {
                if let Some(package) = current.take() {
                    packages.insert(package.name.clone(), package);
                }
            }
            Event::Start(ref e) | Event::Empty(ref e) => {
                if let Some(package) = current.as_mut() {
                    if let Some(primitive) = read_primitive(e)? {
                        package.primitives.push(primitive);
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(packages)
}

fn read_primitive(e: &BytesStart) -> Result<Option<Primitive>, LibraryError> {
    let primitive = match e.name().as_ref() {
        b"wire" => Primitive::Wire {
            layer: layer_attr(e)?,
            from: Point::new(float_attr(e, "x1")?, float_attr(e, "y1")?),
            to: Point::new(float_attr(e, "x2")?, float_attr(e, "y2")?),
        },
        b"hole" => Primitive::Hole {
            at: Point::new(float_attr(e, "x")?, float_attr(e, "y")?),
            drill: float_attr(e, "drill")?,
        },
        b"circle" => Primitive::Circle {
            at: Point::new(float_attr(e, "x")?, float_attr(e, "y")?),
            radius: float_attr(e, "radius")?,
            layer: layer_attr(e)?,
        },
        b"smd" => Primitive::Smd {
            at: Point::new(float_attr(e, "x")?, float_attr(e, "y")?),
            width: float_attr(e, "dx")?,
            height: float_attr(e, "dy")?,
            name: require_attr(e, "name")?,
        },
        b"pad" => {
            let shape = match find_attr(e, "shape")? {
                Some(keyword) => PadShape::from_keyword(&keyword)
                    .ok_or(LibraryError::UnknownPadShape { shape: keyword })?,
                None => PadShape::default(),
            };
            Primitive::ThroughPad {
                at: Point::new(float_attr(e, "x")?, float_attr(e, "y")?),
                diameter: float_attr(e, "diameter")?,
                drill: float_attr(e, "drill")?,
                shape,
                name: require_attr(e, "name")?,
            }
        }
        other => {
            debug!(
                element = %String::from_utf8_lossy(other),
                "skipping unrecognized package element"
            );
            return Ok(None);
        }
    };
    Ok(Some(primitive))
}

fn find_attr(e: &BytesStart, name: &str) -> Result<Option<String>, LibraryError> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == name.as_bytes() {
            return Ok(Some(String::from_utf8_lossy(&attr.value).into_owned()));
        }
    }
    Ok(None)
}

fn require_attr(e: &BytesStart, name: &str) -> Result<String, LibraryError> {
    find_attr(e, name)?.ok_or_else(|| LibraryError::MissingAttribute {
        element: String::from_utf8_lossy(e.name().as_ref()).into_owned(),
        attribute: name.to_string(),
    })
}

fn float_attr(e: &BytesStart, name: &str) -> Result<f64, LibraryError> {
    let raw = require_attr(e, name)?;
    raw.parse().map_err(|_| LibraryError::InvalidNumber {
        attribute: name.to_string(),
        value: raw,
    })
}

fn layer_attr(e: &BytesStart) -> Result<crate::model::PackageLayer, LibraryError> {
    let raw = require_attr(e, "layer")?;
    let number: u8 = raw.parse().map_err(|_| LibraryError::InvalidNumber {
        attribute: "layer".to_string(),
        value: raw,
    })?;
    Ok(crate::model::PackageLayer::from_number(number))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PackageLayer;

    fn single(xml: &str) -> Package {
        let packages = parse_packages(xml).unwrap();
        assert_eq!(packages.len(), 1);
        packages.into_iter().next().unwrap().1
    }

    #[test]
    fn reads_wires_with_layers() {
        let package = single(
            r#"<package name="P">
                 <wire x1="0" y1="0" x2="4" y2="0" width="0.127" layer="21"/>
                 <wire x1="0" y1="0" x2="0" y2="4" width="0.127" layer="20"/>
               </package>"#,
        );
        assert_eq!(package.name, "P");
        assert_eq!(package.primitives.len(), 2);
        assert!(matches!(
            package.primitives[0],
            Primitive::Wire { layer: PackageLayer::Silk, .. }
        ));
        assert!(matches!(
            package.primitives[1],
            Primitive::Wire { layer: PackageLayer::Outline, .. }
        ));
    }

    #[test]
    fn reads_pads_with_default_shape() {
        let package = single(
            r#"<package name="P">
                 <pad name="1" x="0" y="0" drill="0.8" diameter="1.6"/>
                 <pad name="2" x="2.54" y="0" drill="0.8" diameter="1.6" shape="octagon"/>
               </package>"#,
        );
        match &package.primitives[0] {
            Primitive::ThroughPad { shape, name, drill, diameter, .. } => {
                assert_eq!(*shape, PadShape::Round);
                assert_eq!(name, "1");
                assert_eq!(*drill, 0.8);
                assert_eq!(*diameter, 1.6);
            }
            other => panic!("expected a through pad, got {other:?}"),
        }
        assert!(matches!(
            package.primitives[1],
            Primitive::ThroughPad { shape: PadShape::Octagon, .. }
        ));
    }

    #[test]
    fn reads_smd_hole_and_circle() {
        let package = single(
            r#"<package name="P">
                 <smd name="A" x="1" y="2" dx="1.5" dy="0.6" layer="1"/>
                 <hole x="0" y="0" drill="3.2"/>
                 <circle x="5" y="5" radius="1.6" width="0" layer="51"/>
               </package>"#,
        );
        assert!(matches!(
            package.primitives[0],
            Primitive::Smd { width, height, .. } if width == 1.5 && height == 0.6
        ));
        assert!(matches!(
            package.primitives[1],
            Primitive::Hole { drill, .. } if drill == 3.2
        ));
        assert!(matches!(
            package.primitives[2],
            Primitive::Circle { layer: PackageLayer::Docu, radius, .. } if radius == 1.6
        ));
    }

    #[test]
    fn unknown_elements_are_skipped() {
        let package = single(
            r#"<package name="P">
                 <description>an 8 pin part</description>
                 <text x="0" y="0" size="1.27" layer="25">&gt;NAME</text>
                 <pad name="1" x="0" y="0" drill="0.8" diameter="1.6"/>
               </package>"#,
        );
        assert_eq!(package.primitives.len(), 1);
    }

    #[test]
    fn packages_keep_file_order() {
        let packages = parse_packages(
            r#"<packages>
                 <package name="ZULU"><hole x="0" y="0" drill="1"/></package>
                 <package name="ALPHA"><hole x="0" y="0" drill="1"/></package>
               </packages>"#,
        )
        .unwrap();
        let names: Vec<_> = packages.keys().map(String::as_str).collect();
        assert_eq!(names, ["ZULU", "ALPHA"]);
    }

    #[test]
    fn missing_attribute_is_an_error() {
        let err = parse_packages(r#"<package name="P"><hole x="0" y="0"/></package>"#).unwrap_err();
        assert!(matches!(
            err,
            LibraryError::MissingAttribute { ref element, ref attribute }
                if element == "hole" && attribute == "drill"
        ));
    }

    #[test]
    fn non_numeric_attribute_is_an_error() {
        let err =
            parse_packages(r#"<package name="P"><hole x="zero" y="0" drill="1"/></package>"#)
                .unwrap_err();
        assert!(matches!(
            err,
            LibraryError::InvalidNumber { ref attribute, ref value }
                if attribute == "x" && value == "zero"
        ));
    }

    #[test]
    fn unknown_pad_shape_is_an_error() {
        let err = parse_packages(
            r#"<package name="P">
                 <pad name="1" x="0" y="0" drill="0.8" diameter="1.6" shape="long"/>
               </package>"#,
        )
        .unwrap_err();
        assert!(matches!(err, LibraryError::UnknownPadShape { ref shape } if shape == "long"));
    }

    #[test]
    fn primitives_outside_a_package_are_ignored() {
        let packages = parse_packages(
            r#"<library>
                 <wire x1="0" y1="0" x2="1" y2="1" width="0.1" layer="21"/>
                 <package name="P"><hole x="0" y="0" drill="1"/></package>
               </library>"#,
        )
        .unwrap();
        assert_eq!(packages["P"].primitives.len(), 1);
    }
}
