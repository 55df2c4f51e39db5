//! Parsers of the `.rdf` and `.obj` ground mesh formats.

use crate::envelope::EnvelopeError;
use crate::math::{Point, Real};
use alloc::string::ToString;
use alloc::vec::Vec;
use std::io::BufRead;

/// A triangle soup as read from a file, before any transformation.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct RawMesh {
    pub vertices: Vec<Point<Real>>,
    pub faces: Vec<([u32; 3], Real)>,
}

#[derive(Copy, Clone, PartialEq, Eq)]
enum RdfSection {
    None,
    Nodes,
    Elements,
}

fn malformed(line: usize, reason: impl ToString) -> EnvelopeError {
    EnvelopeError::MalformedMesh {
        line,
        reason: reason.to_string(),
    }
}

fn parse_real(token: &str, line: usize) -> Result<Real, EnvelopeError> {
    token
        .parse()
        .map_err(|_| malformed(line, format!("invalid number {:?}", token)))
}

fn parse_point(tokens: &[&str], line: usize) -> Result<Point<Real>, EnvelopeError> {
    Ok(Point::new(
        parse_real(tokens[0], line)?,
        parse_real(tokens[1], line)?,
        parse_real(tokens[2], line)?,
    ))
}

fn check_face(raw: &RawMesh, face: [u32; 3], line: usize) -> Result<(), EnvelopeError> {
    match face.iter().find(|i| **i as usize >= raw.vertices.len()) {
        Some(i) => Err(malformed(
            line,
            format!("vertex index {} out of range ({} vertices)", i, raw.vertices.len()),
        )),
        None => Ok(()),
    }
}

/// Parses a mesh in the `.rdf` format.
///
/// The file has a `[NODES]` section with one `index x y z` row per vertex, and an
/// `[ELEMENTS]` section with one `i j k friction` row per triangle, where the indices are
/// 1-based positions in the node list. Rows starting with `%`, `#` or `{` are comments, and
/// any other `[SECTION]` header ends the current section.
pub(crate) fn parse_rdf(reader: impl BufRead) -> Result<RawMesh, EnvelopeError> {
    let mut raw = RawMesh::default();
    let mut section = RdfSection::None;

    for (i, row) in reader.lines().enumerate() {
        let row = row?;
        let line = i + 1;
        let tokens: Vec<&str> = row.split_whitespace().collect();

        let first = match tokens.first() {
            Some(first) => *first,
            None => continue,
        };

        if first.starts_with(['%', '#', '{']) {
            continue;
        }

        match first {
            "[NODES]" | "NODES" => {
                section = RdfSection::Nodes;
                continue;
            }
            "[ELEMENTS]" | "ELEMENTS" => {
                section = RdfSection::Elements;
                continue;
            }
            _ if first.starts_with('[') => {
                section = RdfSection::None;
                continue;
            }
            _ => {}
        }

        match section {
            RdfSection::None => {}
            RdfSection::Nodes => {
                if tokens.len() != 4 {
                    return Err(malformed(line, "a node row must be `index x y z`"));
                }
                raw.vertices.push(parse_point(&tokens[1..], line)?);
            }
            RdfSection::Elements => {
                if tokens.len() != 4 {
                    return Err(malformed(line, "an element row must be `i j k friction`"));
                }

                let mut face = [0; 3];
                for (k, token) in tokens[..3].iter().enumerate() {
                    let index: u32 = token
                        .parse()
                        .ok()
                        .filter(|index| *index > 0)
                        .ok_or_else(|| malformed(line, format!("invalid index {:?}", token)))?;
                    face[k] = index - 1;
                }
                check_face(&raw, face, line)?;

                let friction = parse_real(tokens[3], line)?;
                if friction < 0.0 {
                    return Err(EnvelopeError::NegativeFriction { line });
                }

                raw.faces.push((face, friction));
            }
        }
    }

    Ok(raw)
}

/// Parses a mesh in the Wavefront `.obj` format.
///
/// Only the `v` and `f` records are read. Faces use 1-based indices, may carry texture and
/// normal indices (`f 1/1/1 2/2/2 3/3/3`), and polygons are split into a fan of triangles.
/// Every triangle gets the same `friction`.
pub(crate) fn parse_obj(reader: impl BufRead, friction: Real) -> Result<RawMesh, EnvelopeError> {
    let mut raw = RawMesh::default();

    for (i, row) in reader.lines().enumerate() {
        let row = row?;
        let line = i + 1;
        let tokens: Vec<&str> = row.split_whitespace().collect();

        match tokens.first() {
            Some(&"v") => {
                if tokens.len() < 4 {
                    return Err(malformed(line, "a vertex record needs 3 coordinates"));
                }
                raw.vertices.push(parse_point(&tokens[1..4], line)?);
            }
            Some(&"f") => {
                if tokens.len() < 4 {
                    return Err(malformed(line, "a face record needs at least 3 vertices"));
                }

                let mut polygon = Vec::with_capacity(tokens.len() - 1);
                for token in &tokens[1..] {
                    let index: u32 = token
                        .split('/')
                        .next()
                        .and_then(|s| s.parse().ok())
                        .filter(|index| *index > 0)
                        .ok_or_else(|| {
                            malformed(line, format!("invalid face vertex {:?}", token))
                        })?;
                    polygon.push(index - 1);
                }

                for k in 1..polygon.len() - 1 {
                    let face = [polygon[0], polygon[k], polygon[k + 1]];
                    check_face(&raw, face, line)?;
                    raw.faces.push((face, friction));
                }
            }
            _ => {}
        }
    }

    Ok(raw)
}

#[cfg(test)]
mod test {
    use super::{parse_obj, parse_rdf};
    use crate::envelope::EnvelopeError;
    use crate::math::Point;

    const RDF: &str = "\
% A square made of two triangles.
{ header comment }
[UNITS]
length = m
[NODES]
1 0.0 0.0 0.0
2 1.0 0.0 0.0
3 1.0 1.0 0.0
# the last corner
4 0.0 1.0 0.0

[ELEMENTS]
1 2 3 0.8
1 3 4 1.0
";

    const OBJ: &str = "\
# A square made of a single quad.
o square
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 1.0 1.0 0.0
v 0.0 1.0 0.0
vn 0.0 0.0 1.0
f 1//1 2//1 3//1 4//1
";

    #[test]
    fn rdf_sections_and_comments() {
        let raw = parse_rdf(RDF.as_bytes()).unwrap();
        assert_eq!(raw.vertices.len(), 4);
        assert_eq!(raw.vertices[2], Point::new(1.0, 1.0, 0.0));
        assert_eq!(raw.faces, vec![([0, 1, 2], 0.8), ([0, 2, 3], 1.0)]);
    }

    #[test]
    fn rdf_errors_report_the_line() {
        let bad_index = "[NODES]\n1 0 0 0\n[ELEMENTS]\n1 1 7 1.0\n";
        assert!(matches!(
            parse_rdf(bad_index.as_bytes()),
            Err(EnvelopeError::MalformedMesh { line: 4, .. })
        ));

        let bad_friction = "[NODES]\n1 0 0 0\n2 1 0 0\n3 0 1 0\n[ELEMENTS]\n1 2 3 -1.0\n";
        assert!(matches!(
            parse_rdf(bad_friction.as_bytes()),
            Err(EnvelopeError::NegativeFriction { line: 6 })
        ));

        let bad_number = "NODES\n0 0 zero 0\n";
        assert!(matches!(
            parse_rdf(bad_number.as_bytes()),
            Err(EnvelopeError::MalformedMesh { line: 2, .. })
        ));
    }

    #[test]
    fn rdf_indices_are_one_based() {
        let last_node = "[NODES]\n1 0 0 0\n2 1 0 0\n3 0 1 0\n[ELEMENTS]\n1 2 3 1.0\n";
        let raw = parse_rdf(last_node.as_bytes()).unwrap();
        assert_eq!(raw.faces, vec![([0, 1, 2], 1.0)]);

        let zero = "[NODES]\n1 0 0 0\n2 1 0 0\n3 0 1 0\n[ELEMENTS]\n0 1 2 1.0\n";
        assert!(matches!(
            parse_rdf(zero.as_bytes()),
            Err(EnvelopeError::MalformedMesh { line: 6, .. })
        ));
    }

    #[test]
    fn obj_polygons_are_fanned() {
        let raw = parse_obj(OBJ.as_bytes(), 0.9).unwrap();
        assert_eq!(raw.vertices.len(), 4);
        assert_eq!(raw.faces, vec![([0, 1, 2], 0.9), ([0, 2, 3], 0.9)]);
    }

    #[test]
    fn obj_indices_are_one_based() {
        let zero = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 0 1 2\n";
        assert!(matches!(
            parse_obj(zero.as_bytes(), 1.0),
            Err(EnvelopeError::MalformedMesh { line: 4, .. })
        ));

        let out_of_range = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 4\n";
        assert!(parse_obj(out_of_range.as_bytes(), 1.0).is_err());
    }
}
