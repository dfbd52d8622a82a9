use contracts::domain::a004_consultation::request::{
    popup_flag_is_set, POPUP_SHOWN_KEY, POPUP_SHOWN_VALUE,
};
use contracts::shared::api_path::API_TOKEN_KEY;
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Admin token saved by the back office, if any.
pub fn api_token() -> Option<String> {
    get_local_storage()?
        .get_item(API_TOKEN_KEY)
        .ok()?
        .filter(|token| !token.is_empty())
}

/// Whether the consultation popup was already shown in this browser.
pub fn popup_shown() -> bool {
    let stored = get_local_storage()
        .and_then(|storage| storage.get_item(POPUP_SHOWN_KEY).ok().flatten());
    popup_flag_is_set(stored.as_deref())
}

pub fn mark_popup_shown() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(POPUP_SHOWN_KEY, POPUP_SHOWN_VALUE);
    }
}
