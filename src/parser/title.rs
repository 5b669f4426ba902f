const TITLE_OPEN: &str = "<title>";
const TITLE_SEPARATOR: &str = " · SteamDB";

/// Listing name and the position row scanning should start from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleSpan {
    pub name: String,
    pub cursor: usize,
}

/// Pull the listing name out of `<title>NAME · SteamDB</title>`.
///
/// Missing markers give an empty name and a cursor of 0 so the whole
/// document is still scanned for rows.
pub fn extract_title(doc: &str) -> TitleSpan {
    let span = doc.find(TITLE_OPEN).and_then(|open| {
        let start = open + TITLE_OPEN.len();
        let end = doc.find(TITLE_SEPARATOR)?;
        (end >= start).then(|| (start, end))
    });

    match span {
        Some((start, end)) => TitleSpan {
            name: doc[start..end].to_string(),
            cursor: end,
        },
        None => TitleSpan {
            name: String::new(),
            cursor: 0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_between_markers() {
        let doc = "<html><head><title>Godot Engine · SteamDB</title></head>";
        let t = extract_title(doc);
        assert_eq!(t.name, "Godot Engine");
        assert_eq!(t.cursor, doc.find(" · SteamDB").unwrap());
    }

    #[test]
    fn missing_separator() {
        let t = extract_title("<title>Godot Engine</title>");
        assert_eq!(t.name, "");
        assert_eq!(t.cursor, 0);
    }

    #[test]
    fn missing_open_marker() {
        let t = extract_title("Unity · SteamDB");
        assert_eq!(t.name, "");
        assert_eq!(t.cursor, 0);
    }

    #[test]
    fn separator_before_title() {
        let t = extract_title("x · SteamDB <title>Unity");
        assert_eq!(t.name, "");
        assert_eq!(t.cursor, 0);
    }

    #[test]
    fn empty_document() {
        assert_eq!(
            extract_title(""),
            TitleSpan {
                name: String::new(),
                cursor: 0
            }
        );
    }
}
