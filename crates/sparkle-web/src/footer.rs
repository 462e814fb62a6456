use crate::constants::FOOTER_YEAR_ID;
use web_sys as web;

#[inline]
pub fn set_current_year(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(FOOTER_YEAR_ID) {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
}
