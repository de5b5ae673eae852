use crate::data;
use crate::error::CatalogError;
use crate::geometry::coords::parse_coords;
use crate::geometry::limits;
use crate::model::{Municipality, Point, Subdivision};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// Static territory data: ordered subdivisions and their municipalities.
///
/// Subdivision order is declaration order and drives the legend. A
/// municipality may reference a subdivision that does not exist; lookups
/// return `None` and the renderer falls back to a neutral color.
#[derive(Clone, Debug)]
pub struct Catalog {
    subdivisions: Vec<Subdivision>,
    municipalities: Vec<Municipality>,
    sub_index: HashMap<String, usize>,
    muni_index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(
        subdivisions: Vec<Subdivision>,
        municipalities: Vec<Municipality>,
    ) -> Result<Catalog, CatalogError> {
        if subdivisions.len() > limits::MAX_SUBDIVISIONS {
            return Err(CatalogError::TooMany {
                kind: "subdivisions",
                got: subdivisions.len(),
                max: limits::MAX_SUBDIVISIONS,
            });
        }
        if municipalities.len() > limits::MAX_MUNICIPALITIES {
            return Err(CatalogError::TooMany {
                kind: "municipalities",
                got: municipalities.len(),
                max: limits::MAX_MUNICIPALITIES,
            });
        }
        let mut sub_index = HashMap::with_capacity(subdivisions.len());
        for (i, s) in subdivisions.iter().enumerate() {
            if sub_index.insert(s.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateId { kind: "subdivision", id: s.id.clone() });
            }
        }
        let mut muni_index = HashMap::with_capacity(municipalities.len());
        for (i, m) in municipalities.iter().enumerate() {
            if m.boundary.len() < limits::MIN_BOUNDARY_POINTS {
                return Err(CatalogError::DegenerateBoundary(m.id.clone()));
            }
            if muni_index.insert(m.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateId { kind: "municipality", id: m.id.clone() });
            }
            if !sub_index.contains_key(&m.subdivision_id) {
                log::warn!(
                    "municipality '{}' references unknown subdivision '{}'",
                    m.id,
                    m.subdivision_id
                );
            }
        }
        Ok(Catalog { subdivisions, municipalities, sub_index, muni_index })
    }

    /// The bundled Kosovo territory (7 regions, 38 municipalities).
    pub fn builtin() -> Result<Catalog, CatalogError> {
        let subdivisions = data::SUBDIVISIONS
            .iter()
            .map(|s| Subdivision::new(s.id, s.color, s.name))
            .collect();
        let municipalities = data::MUNICIPALITIES
            .iter()
            .map(|m| Ok(Municipality::new(m.id, m.name, m.region, parse_coords(m.coords)?)))
            .collect::<Result<Vec<_>, CatalogError>>()?;
        Catalog::new(subdivisions, municipalities)
    }

    pub fn from_json_str(s: &str) -> Result<Catalog, CatalogError> {
        let v: Value = serde_json::from_str(s).map_err(|e| CatalogError::Json(e.to_string()))?;
        Catalog::from_json_value(v)
    }

    /// Accepts `{ subdivisions: [{id,color,name}], municipalities: [{id,name,region,coords}] }`
    /// where `coords` is a coords string or an array of `[x, y]` pairs.
    pub fn from_json_value(v: Value) -> Result<Catalog, CatalogError> {
        #[derive(Deserialize)]
        struct SubSer {
            id: String,
            color: String,
            name: String,
        }
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum CoordsSer {
            Text(String),
            Pairs(Vec<[f32; 2]>),
        }
        #[derive(Deserialize)]
        struct MuniSer {
            id: String,
            name: String,
            region: String,
            coords: CoordsSer,
        }
        #[derive(Deserialize)]
        struct CatalogSer {
            subdivisions: Vec<SubSer>,
            municipalities: Vec<MuniSer>,
        }

        let raw: CatalogSer =
            serde_json::from_value(v).map_err(|e| CatalogError::Json(e.to_string()))?;
        if raw.municipalities.len() > limits::MAX_MUNICIPALITIES {
            return Err(CatalogError::TooMany {
                kind: "municipalities",
                got: raw.municipalities.len(),
                max: limits::MAX_MUNICIPALITIES,
            });
        }
        let subdivisions = raw
            .subdivisions
            .into_iter()
            .map(|s| Subdivision::new(s.id, s.color, s.name))
            .collect();
        let mut municipalities = Vec::with_capacity(raw.municipalities.len());
        for m in raw.municipalities {
            let boundary = match m.coords {
                CoordsSer::Text(s) => parse_coords(&s)?,
                CoordsSer::Pairs(pairs) => {
                    if pairs.len() > limits::MAX_BOUNDARY_POINTS {
                        return Err(CatalogError::TooMany {
                            kind: "boundary points",
                            got: pairs.len(),
                            max: limits::MAX_BOUNDARY_POINTS,
                        });
                    }
                    let mut pts = Vec::with_capacity(pairs.len());
                    for [x, y] in pairs {
                        for v in [x, y] {
                            if !limits::in_coord_bounds(v) {
                                return Err(CatalogError::OutOfBounds(v));
                            }
                        }
                        pts.push(Point::new(x, y));
                    }
                    pts
                }
            };
            municipalities.push(Municipality::new(m.id, m.name, m.region, boundary));
        }
        Catalog::new(subdivisions, municipalities)
    }

    pub fn subdivisions(&self) -> &[Subdivision] {
        &self.subdivisions
    }

    pub fn municipalities(&self) -> &[Municipality] {
        &self.municipalities
    }

    pub fn subdivision(&self, id: &str) -> Option<&Subdivision> {
        self.sub_index.get(id).map(|&i| &self.subdivisions[i])
    }

    pub fn municipality(&self, id: &str) -> Option<&Municipality> {
        self.muni_index.get(id).map(|&i| &self.municipalities[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.muni_index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.municipalities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.municipalities.is_empty()
    }
}
