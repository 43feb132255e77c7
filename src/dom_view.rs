//! DOM View
//!
//! `ItemView` over the live document. Elements are looked up by selector on
//! every call; nothing is cached between calls.

use calorie_core::markup::{self, DisplayedRow};
use calorie_core::{Item, ItemId, ItemInput, ItemView, ViewError, ViewResult};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use crate::config::Selectors;

pub struct DomView {
    document: Document,
    selectors: Selectors,
}

fn js_error(err: JsValue) -> ViewError {
    ViewError::Dom(format!("{:?}", err))
}

impl DomView {
    pub fn new(document: Document, selectors: Selectors) -> Self {
        Self { document, selectors }
    }

    fn query(&self, selector: &str) -> ViewResult<Element> {
        self.document
            .query_selector(selector)
            .map_err(js_error)?
            .ok_or_else(|| ViewError::MissingElement(selector.to_string()))
    }

    fn query_as<T: JsCast>(&self, selector: &str) -> ViewResult<T> {
        self.query(selector)?
            .dyn_into::<T>()
            .map_err(|_| ViewError::WrongElementType(selector.to_string()))
    }

    fn input(&self, selector: &str) -> ViewResult<HtmlInputElement> {
        self.query_as::<HtmlInputElement>(selector)
    }

    fn set_display(&self, selector: &str, display: &str) -> ViewResult<()> {
        self.query_as::<HtmlElement>(selector)?
            .style()
            .set_property("display", display)
            .map_err(js_error)
    }

    fn row(&self, id: ItemId) -> ViewResult<Element> {
        self.query(&format!("#{}", markup::row_element_id(id)))
    }

    fn set_form(&self, name: &str, calories: &str) -> ViewResult<()> {
        self.input(&self.selectors.item_name_input)?.set_value(name);
        self.input(&self.selectors.item_calories_input)?.set_value(calories);
        Ok(())
    }
}

fn child_text(row: &Element, selector: &str) -> ViewResult<String> {
    Ok(row
        .query_selector(selector)
        .map_err(js_error)?
        .and_then(|el| el.text_content())
        .unwrap_or_default())
}

impl ItemView for DomView {
    fn render_items(&mut self, items: &[Item]) -> ViewResult<()> {
        self.query(&self.selectors.item_list)?
            .set_inner_html(&markup::list_html(items));
        Ok(())
    }

    fn read_input(&self) -> ViewResult<ItemInput> {
        Ok(ItemInput::new(
            self.input(&self.selectors.item_name_input)?.value(),
            self.input(&self.selectors.item_calories_input)?.value(),
        ))
    }

    fn append_item(&mut self, item: &Item) -> ViewResult<()> {
        self.set_display(&self.selectors.item_list, "block")?;

        let li = self.document.create_element("li").map_err(js_error)?;
        li.set_class_name(markup::ROW_CLASS);
        li.set_id(&markup::row_element_id(item.id));
        li.set_inner_html(&markup::row_inner_html(item));

        self.query(&self.selectors.item_list)?
            .append_child(&li)
            .map_err(js_error)?;
        Ok(())
    }

    fn replace_item(&mut self, item: &Item) -> ViewResult<()> {
        self.row(item.id)?
            .set_inner_html(&markup::row_inner_html(item));
        Ok(())
    }

    fn remove_item(&mut self, id: ItemId) -> ViewResult<()> {
        self.row(id)?.remove();
        Ok(())
    }

    fn clear_input(&mut self) -> ViewResult<()> {
        self.set_form("", "")
    }

    fn fill_form(&mut self, item: &Item) -> ViewResult<()> {
        self.set_form(&item.name, &item.calories.to_string())?;
        self.show_edit_state()
    }

    fn show_edit_state(&mut self) -> ViewResult<()> {
        self.set_display(&self.selectors.update_btn, "inline")?;
        self.set_display(&self.selectors.delete_btn, "inline")?;
        self.set_display(&self.selectors.back_btn, "inline")?;
        self.set_display(&self.selectors.add_btn, "none")
    }

    fn clear_edit_state(&mut self) -> ViewResult<()> {
        self.clear_input()?;
        self.set_display(&self.selectors.update_btn, "none")?;
        self.set_display(&self.selectors.delete_btn, "none")?;
        self.set_display(&self.selectors.back_btn, "none")?;
        self.set_display(&self.selectors.add_btn, "inline")
    }

    fn set_list_visible(&mut self, visible: bool) -> ViewResult<()> {
        let display = if visible { "block" } else { "none" };
        self.set_display(&self.selectors.item_list, display)
    }

    fn show_total(&mut self, total: u64) -> ViewResult<()> {
        self.query(&self.selectors.total_calories)?
            .set_text_content(Some(&total.to_string()));
        Ok(())
    }

    fn displayed_rows(&self) -> ViewResult<Vec<DisplayedRow>> {
        let nodes = self
            .document
            .query_selector_all(&self.selectors.list_items)
            .map_err(js_error)?;

        let mut rows = Vec::with_capacity(nodes.length() as usize);
        for i in 0..nodes.length() {
            let Some(row) = nodes.get(i).and_then(|node| node.dyn_into::<Element>().ok()) else {
                continue;
            };
            let id = row.id();
            let parsed = DisplayedRow::from_text(
                &id,
                &child_text(&row, "strong")?,
                &child_text(&row, "em")?,
            )
            .ok_or_else(|| ViewError::Dom(format!("unreadable row {:?}", id)))?;
            rows.push(parsed);
        }
        Ok(rows)
    }
}
