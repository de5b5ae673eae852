use super::limits;
use crate::error::CatalogError;
use crate::model::Point;

#[inline]
fn is_sep(c: u8) -> bool {
    c == b',' || c == b' ' || c == b'\n' || c == b'\t' || c == b'\r'
}

fn skip_sep(bytes: &[u8], i: &mut usize) {
    while *i < bytes.len() && is_sep(bytes[*i]) {
        *i += 1;
    }
}

/// Parse an HTML image-map `coords` list (`"x1,y1,x2,y2,..."`) into points.
///
/// Commas and whitespace are both accepted as separators. The point count is
/// not checked here; see [`crate::Catalog::new`].
pub fn parse_coords(s: &str) -> Result<Vec<Point>, CatalogError> {
    let bytes = s.as_bytes();
    let mut i = 0usize;
    let mut values: Vec<f32> = Vec::new();
    loop {
        skip_sep(bytes, &mut i);
        if i >= bytes.len() {
            break;
        }
        let start = i;
        while i < bytes.len() && !is_sep(bytes[i]) {
            i += 1;
        }
        // separators are ASCII so both ends sit on char boundaries
        let tok = &s[start..i];
        let v = tok
            .parse::<f32>()
            .map_err(|_| CatalogError::InvalidNumber(tok.to_string()))?;
        if !limits::in_coord_bounds(v) {
            return Err(CatalogError::OutOfBounds(v));
        }
        values.push(v);
        if values.len() > limits::MAX_BOUNDARY_POINTS * 2 {
            return Err(CatalogError::TooMany {
                kind: "boundary points",
                got: values.len() / 2,
                max: limits::MAX_BOUNDARY_POINTS,
            });
        }
    }
    if values.len() % 2 != 0 {
        return Err(CatalogError::OddCoordinateCount(values.len()));
    }
    Ok(values.chunks_exact(2).map(|c| Point::new(c[0], c[1])).collect())
}
