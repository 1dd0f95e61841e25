use seed::{prelude::*, *};
use std::cell::RefCell;

mod catalog_page;

const ROOT_ID: &str = "app";

thread_local! {
    static APP: RefCell<Option<App<Msg, Model, Vec<Node<Msg>>>>> = RefCell::new(None);
}

// ------ ------
//     Init
// ------ ------

fn init(_: Url, orders: &mut impl Orders<Msg>) -> Model {
    let model = Model::default();
    orders.proxy(Msg::CatalogPage).perform_cmd(async {
        catalog_page::Msg::TagsFetched(catalog_page::fetch_json(shared::TAGS_URL).await)
    });
    model
}

// ------ ------
//     Model
// ------ ------

#[derive(Default)]
struct Model {
    catalog_page: catalog_page::Model,
}

// ------ ------
//    Update
// ------ ------

enum Msg {
    CatalogPage(catalog_page::Msg),
}

fn update(msg: Msg, model: &mut Model, orders: &mut impl Orders<Msg>) {
    match msg {
        Msg::CatalogPage(msg) => {
            catalog_page::update(
                msg,
                &mut model.catalog_page,
                &mut orders.proxy(Msg::CatalogPage),
            );
        }
    }
}

// ------ ------
//     View
// ------ ------

fn view(model: &Model) -> Vec<Node<Msg>> {
    nodes![div![
        attrs! {At::Class => "catalog"},
        catalog_page::view(&model.catalog_page).map_msg(Msg::CatalogPage),
    ]]
}

// ------ ------
//    Search
// ------ ------

/// Show only the entries whose name contains `keyword`, ignoring case.
#[wasm_bindgen(js_name = searchROMs)]
pub fn search_roms(keyword: String) {
    APP.with(|app| match app.borrow().as_ref() {
        Some(app) => app.update(Msg::CatalogPage(catalog_page::Msg::Search(keyword))),
        None => web_sys::console::log_1(&"searchROMs called before the catalog started".into()),
    });
}

// ------ ------
//     Start
// ------ ------

#[wasm_bindgen(start)]
pub fn start() {
    let has_root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(ROOT_ID))
        .is_some();
    if !has_root {
        web_sys::console::error_1(
            &format!("No element with id {} to mount the catalog on", ROOT_ID).into(),
        );
        return;
    }

    let app = App::start(ROOT_ID, init, update, view);
    APP.with(|slot| *slot.borrow_mut() = Some(app));
}
