//! Row Rendering Tests
//!
//! Mounts `TodoRow` in a browser and checks that user text lands in the
//! DOM as text, never as markup. Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use todo_view::components::TodoRow;
use todo_view::config::AppConfig;
use todo_view::context::AppContext;
use todo_view::models::{Todo, TodoId};
use todo_view::view::RowView;

wasm_bindgen_test_configure!(run_in_browser);

fn mount_row(todo: Todo) -> web_sys::HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let container: web_sys::HtmlElement = document.create_element("div").unwrap().unchecked_into();
    document.body().unwrap().append_child(&container).unwrap();

    let row = RowView::from_todo(&todo);
    let handle = leptos::mount::mount_to(container.clone(), move || {
        provide_context(AppContext::new(AppConfig::default()));
        view! { <TodoRow row=row /> }
    });
    // Keep the row mounted for the rest of the test
    std::mem::forget(handle);
    container
}

fn inner_html(container: &web_sys::HtmlElement, selector: &str) -> String {
    container
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("{} not rendered", selector))
        .inner_html()
}

#[wasm_bindgen_test]
fn test_title_markup_is_escaped() {
    let container = mount_row(Todo {
        id: TodoId::Int(1),
        title: "<script>x</script>".into(),
        description: None,
        completed: false,
        created_at: None,
    });

    assert_eq!(inner_html(&container, ".todo-title"), "&lt;script&gt;x&lt;/script&gt;");
    assert!(container.query_selector("script").unwrap().is_none());
}

#[wasm_bindgen_test]
fn test_description_markup_is_escaped() {
    let container = mount_row(Todo {
        id: TodoId::Text("a\"b".into()),
        title: "Tom & Jerry".into(),
        description: Some("<img src=x onerror=alert(1)> & more".into()),
        completed: true,
        created_at: None,
    });

    assert_eq!(inner_html(&container, ".todo-title"), "Tom &amp; Jerry");
    assert_eq!(
        inner_html(&container, ".todo-description"),
        "&lt;img src=x onerror=alert(1)&gt; &amp; more"
    );
    assert!(container.query_selector("img").unwrap().is_none());

    let row = container.query_selector(".todo-item").unwrap().unwrap();
    assert_eq!(row.get_attribute("data-id").as_deref(), Some("a\"b"));
}
