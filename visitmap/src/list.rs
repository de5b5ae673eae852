use crate::storage::Storage;
use crate::store::VisitedStore;
use serde::Serialize;
use std::cmp::Ordering;

pub const ROW_CLASS: &str = "city-item";
pub const VISITED_CLASS: &str = "visited";

/// One entry of the municipality list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ListRow {
    pub id: String,
    pub name: String,
    pub subdivision_id: String,
    pub visited: bool,
}

impl ListRow {
    pub fn class_name(&self) -> String {
        if self.visited {
            format!("{} {}", ROW_CLASS, VISITED_CLASS)
        } else {
            ROW_CLASS.to_string()
        }
    }
}

/// Rows sorted by subdivision id, then by display name.
pub fn list_rows<S: Storage>(store: &VisitedStore<S>) -> Vec<ListRow> {
    let mut rows: Vec<ListRow> = store
        .catalog()
        .municipalities()
        .iter()
        .map(|m| ListRow {
            id: m.id.clone(),
            name: m.display_name.clone(),
            subdivision_id: m.subdivision_id.clone(),
            visited: store.contains(&m.id),
        })
        .collect();
    rows.sort_by(|a, b| {
        a.subdivision_id
            .cmp(&b.subdivision_id)
            .then_with(|| collate(&a.name, &b.name))
            .then_with(|| a.id.cmp(&b.id))
    });
    rows
}

// Latin letters with diacritics sort next to their base letter.
fn fold_char(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'č' | 'ĉ' | 'ċ' => 'c',
        'ď' | 'đ' => 'd',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => 'e',
        'ğ' | 'ĝ' | 'ġ' | 'ģ' => 'g',
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'į' | 'ı' => 'i',
        'ł' | 'ľ' | 'ĺ' | 'ļ' => 'l',
        'ñ' | 'ń' | 'ň' | 'ņ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => 'o',
        'ř' | 'ŕ' => 'r',
        'ś' | 'š' | 'ş' | 'ș' => 's',
        'ť' | 'ţ' | 'ț' => 't',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' | 'ų' => 'u',
        'ý' | 'ÿ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        _ => c,
    }
}

/// Locale-style comparison: case and diacritics are ignored at the primary
/// level and only break ties.
pub fn collate(a: &str, b: &str) -> Ordering {
    let key = |s: &str| -> Vec<char> {
        s.chars().flat_map(char::to_lowercase).map(fold_char).collect()
    };
    key(a).cmp(&key(b)).then_with(|| a.cmp(b))
}

/// Completion summary shown above the list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub visited: usize,
    pub total: usize,
    /// round(100 * visited / total), at most 100; 0 for an empty catalog.
    pub percent: u32,
}

impl Stats {
    pub fn compute(visited: usize, total: usize) -> Stats {
        Stats { visited, total, percent: completion_percent(visited, total) }
    }

    pub fn of<S: Storage>(store: &VisitedStore<S>) -> Stats {
        Stats::compute(store.count(), store.catalog().len())
    }

    /// Text for the completion label and the progress bar width.
    pub fn percent_text(&self) -> String {
        format!("{}%", self.percent)
    }
}

pub fn completion_percent(visited: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let pct = (visited as f64 / total as f64 * 100.0).round();
    pct.clamp(0.0, 100.0) as u32
}
