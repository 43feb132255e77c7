//! Row Markup
//!
//! HTML templates for list rows and the reverse mapping from a displayed
//! row back to its id, name and calorie text.

use crate::model::{Item, ItemId};

/// Prefix of every row element id (`item-0`, `item-1`, ...)
pub const ROW_ID_PREFIX: &str = "item-";
/// Class carried by each `<li>` row
pub const ROW_CLASS: &str = "collection-item";
/// Class of the clickable edit icon inside a row
pub const EDIT_ICON_CLASS: &str = "edit-item";

const NAME_SUFFIX: &str = ": ";
const CALORIES_SUFFIX: &str = " Calories";

/// A row as read back from the display surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayedRow {
    pub id: ItemId,
    pub name: String,
    pub calories_text: String,
}

impl DisplayedRow {
    /// Build from the row element id and the text of its `<strong>` and `<em>` children
    pub fn from_text(element_id: &str, strong_text: &str, em_text: &str) -> Option<Self> {
        Some(Self {
            id: parse_row_element_id(element_id)?,
            name: strong_text.strip_suffix(NAME_SUFFIX)?.to_string(),
            calories_text: em_text.strip_suffix(CALORIES_SUFFIX)?.to_string(),
        })
    }
}

pub fn row_element_id(id: ItemId) -> String {
    format!("{}{}", ROW_ID_PREFIX, id)
}

/// `item-12` -> `12`
pub fn parse_row_element_id(element_id: &str) -> Option<ItemId> {
    element_id.strip_prefix(ROW_ID_PREFIX)?.parse().ok()
}

/// Inner HTML of a row: label, calories and the edit icon
pub fn row_inner_html(item: &Item) -> String {
    format!(
        r##"<strong>{}{}</strong> <em>{}{}</em><a href="#" class="secondary-content"><i class="{} fa fa-pencil"></i></a>"##,
        escape_html(&item.name),
        NAME_SUFFIX,
        item.calories,
        CALORIES_SUFFIX,
        EDIT_ICON_CLASS,
    )
}

/// Full markup of the list body
pub fn list_html(items: &[Item]) -> String {
    items
        .iter()
        .map(|item| {
            format!(
                r#"<li class="{}" id="{}">{}</li>"#,
                ROW_CLASS,
                row_element_id(item.id),
                row_inner_html(item)
            )
        })
        .collect()
}

/// Read a row back from its element id and inner HTML
pub fn parse_row_html(element_id: &str, inner_html: &str) -> Option<DisplayedRow> {
    let strong = between(inner_html, "<strong>", "</strong>")?;
    let em = between(inner_html, "<em>", "</em>")?;
    DisplayedRow::from_text(element_id, &unescape_html(strong), &unescape_html(em))
}

fn between<'a>(text: &'a str, open: &str, close: &str) -> Option<&'a str> {
    let start = text.find(open)? + open.len();
    let len = text[start..].find(close)?;
    Some(&text[start..start + len])
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

pub fn unescape_html(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_element_id() {
        assert_eq!(row_element_id(7), "item-7");
        assert_eq!(parse_row_element_id("item-7"), Some(7));
        assert_eq!(parse_row_element_id("item-"), None);
        assert_eq!(parse_row_element_id("item-x"), None);
        assert_eq!(parse_row_element_id("row-7"), None);
    }

    #[test]
    fn test_row_inner_html() {
        let html = row_inner_html(&Item::new(0, "Steak Dinner", 1200));
        assert!(html.starts_with("<strong>Steak Dinner: </strong> <em>1200 Calories</em>"));
        assert!(html.contains(r#"<i class="edit-item fa fa-pencil"></i>"#));
    }

    #[test]
    fn test_name_is_escaped() {
        let html = row_inner_html(&Item::new(1, "<b>Fish & Chips</b>", 800));
        assert!(html.contains("&lt;b&gt;Fish &amp; Chips&lt;/b&gt;: "));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_list_html_keeps_order() {
        let items = vec![Item::new(0, "Eggs", 300), Item::new(2, "Toast", 150)];
        let html = list_html(&items);
        let eggs = html.find(r#"id="item-0""#).unwrap();
        let toast = html.find(r#"id="item-2""#).unwrap();
        assert!(eggs < toast);
        assert_eq!(html.matches(r#"<li class="collection-item""#).count(), 2);
    }

    #[test]
    fn test_rows_read_back() {
        for item in [
            Item::new(0, "Steak Dinner", 1200),
            Item::new(3, "Mac & \"Cheese\" <large>", 950),
            Item::new(12, "Ratio: 2:1", 0),
            Item::new(4, "&lt;literal&gt;", 5),
        ] {
            let row = parse_row_html(&row_element_id(item.id), &row_inner_html(&item)).unwrap();
            assert_eq!(row.id, item.id);
            assert_eq!(row.name, item.name);
            assert_eq!(row.calories_text, item.calories.to_string());
        }
    }

    #[test]
    fn test_from_text_rejects_foreign_markup() {
        assert!(DisplayedRow::from_text("item-1", "Eggs", "300 Calories").is_none());
        assert!(DisplayedRow::from_text("item-1", "Eggs: ", "300").is_none());
        assert!(DisplayedRow::from_text("other", "Eggs: ", "300 Calories").is_none());
    }
}
