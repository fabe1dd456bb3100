//! Browser smoke test: `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn affinity_round_trip_through_exports() {
    let mounted = moni_vn::handle_request(
        "POST",
        "/api/vn/mount",
        "",
        r#"{"elements":[{"id":"vnAffinityYuri"},{"id":"vnAffinityYuriVal"},{"id":"affinityPanel","classes":["visible"]}]}"#,
    );
    assert!(mounted.contains(r#""mounted":3"#));

    let patches = moni_vn::update_affinity_panel(r#"{"yuri":35}"#);
    assert!(patches.contains(r#""value":"35%""#));
    assert!(patches.contains(r#""text":"35""#));

    assert!(moni_vn::hide_affinity_panel().contains("remove_class"));
}
