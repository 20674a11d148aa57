use mealtime::recipe::{Ingredient, Recipe};
use serde_json::json;

#[test]
fn unsaved_recipe_serializes_without_id() {
    let recipe = Recipe { title: "Goulash".into(), ..Recipe::default() };
    let value = serde_json::to_value(&recipe).unwrap();
    assert!(value.get("_id").is_none());
    assert_eq!(value["title"], json!("Goulash"));
    assert_eq!(value["image"], json!(null));
}

#[test]
fn stored_recipe_keeps_wire_field_names() {
    let body = json!({
        "_id": "64f1c0ffee01",
        "title": "Dobos torte",
        "description": "Layered sponge cake",
        "category": "Dessert",
        "country": "Hungary",
        "mainingredient": "chocolate",
        "preptime": 120,
        "defaultportions": 8,
        "ingredients": [{ "name": "egg", "quantity": 6.0, "unit": "", "notes": "/" }],
        "image": null
    });
    let recipe: Recipe = serde_json::from_value(body).unwrap();
    assert_eq!(recipe.id.as_deref(), Some("64f1c0ffee01"));
    assert_eq!(recipe.main_ingredient, "chocolate");
    assert_eq!(recipe.prep_time, 120);
    assert_eq!(recipe.default_portions, 8);
    assert_eq!(recipe.ingredients[0].display_note(), None);
}

#[test]
fn image_round_trips_as_base64() {
    let recipe = Recipe { image: Some(vec![1, 2, 3, 255]), ..Recipe::default() };
    let value = serde_json::to_value(&recipe).unwrap();
    assert_eq!(value["image"], json!("AQID/w=="));

    let back: Recipe = serde_json::from_value(value).unwrap();
    assert_eq!(back.image, Some(vec![1, 2, 3, 255]));
}

#[test]
fn missing_image_deserializes_as_none() {
    let recipe: Recipe = serde_json::from_value(json!({ "title": "Goulash" })).unwrap();
    assert_eq!(recipe.image, None);
}

#[test]
fn ingredient_summary_formats_like_the_recipe_card() {
    let whole =
        Ingredient { name: "egg".into(), quantity: 6.0, unit: String::new(), notes: String::new() };
    assert_eq!(whole.summary(), "egg 6");

    let fractional =
        Ingredient { name: "milk".into(), quantity: 0.5, unit: "l".into(), notes: "warm".into() };
    assert_eq!(fractional.summary(), "milk 0.50 l (warm)");

    // zero quantity means "unspecified"; "/" is the legacy no-note marker
    let bare =
        Ingredient { name: "salt".into(), quantity: 0.0, unit: String::new(), notes: "/".into() };
    assert_eq!(bare.summary(), "salt");
}
