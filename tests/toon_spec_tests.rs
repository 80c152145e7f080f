use serde::{Deserialize, Serialize};
use serde_toon::{to_string, to_string_with_options, Delimiter, EncodeOptions};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct User {
    id: u32,
    name: String,
    role: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Product {
    sku: String,
    qty: u32,
    price: f64,
}

#[test]
fn test_tabular_array_format() {
    let users = vec![
        User {
            id: 1,
            name: "Alice".to_string(),
            role: "admin".to_string(),
        },
        User {
            id: 2,
            name: "Bob".to_string(),
            role: "user".to_string(),
        },
    ];

    let toon = to_string(&users).unwrap();
    println!("Tabular format:\n{}", toon);

    // Field order follows declaration order, not alphabetical.
    assert!(toon.contains("[2]{"));
    assert!(toon.contains("id,name,role"));
    assert!(toon.contains("1,Alice,admin"));
    assert!(toon.contains("2,Bob,user"));
}

#[test]
fn test_inline_primitive_array() {
    let tags = vec!["admin", "developer", "ops"];
    let toon = to_string(&tags).unwrap();
    println!("Inline array:\n{}", toon);

    assert!(toon.starts_with("[3]: "));
    assert!(toon.contains("admin,developer,ops"));
}

#[test]
fn test_tab_delimiter() {
    let products = vec![
        Product {
            sku: "A1".to_string(),
            qty: 2,
            price: 9.99,
        },
        Product {
            sku: "B2".to_string(),
            qty: 1,
            price: 14.5,
        },
    ];

    let options = EncodeOptions::new().with_delimiter(Delimiter::Tab);
    let toon = to_string_with_options(&products, &options).unwrap();
    println!("Tab-delimited tabular:\n{}", toon);

    assert!(toon.contains("[2\t]{"));
    assert!(toon.contains("sku\tqty\tprice"));
}

#[test]
fn test_pipe_delimiter() {
    let products = vec![
        Product {
            sku: "A1".to_string(),
            qty: 2,
            price: 9.99,
        },
        Product {
            sku: "B2".to_string(),
            qty: 1,
            price: 14.5,
        },
    ];

    let options = EncodeOptions::new().with_delimiter(Delimiter::Pipe);
    let toon = to_string_with_options(&products, &options).unwrap();
    println!("Pipe-delimited tabular:\n{}", toon);

    assert!(toon.contains("[2|]{"));
    assert!(toon.contains("sku|qty|price"));
}

#[test]
fn test_mixed_array_list_format() {
    #[derive(Serialize)]
    #[serde(untagged)]
    enum Item {
        Number(i32),
        Named { name: String, age: u32 },
        Text(String),
    }

    let mixed = vec![
        Item::Number(1),
        Item::Named {
            name: "Alice".to_string(),
            age: 30,
        },
        Item::Text("text".to_string()),
    ];

    let toon = to_string(&mixed).unwrap();
    println!("Mixed array (list format):\n{}", toon);

    assert!(toon.contains("[3]:"));
    assert!(toon.contains("- 1"));
    assert!(toon.contains("name: Alice"));
    assert!(toon.contains("age: 30"));
    assert!(toon.contains("- text"));
}

#[test]
fn test_empty_array() {
    let empty: Vec<String> = vec![];
    let toon = to_string(&empty).unwrap();
    println!("Empty array:\n{}", toon);

    assert_eq!(toon, "[0]:");
}

#[test]
fn test_quoting_rules() {
    #[derive(Serialize)]
    struct Data {
        normal: String,
        with_comma: String,
        with_spaces: String,
        boolean_like: String,
        number_like: String,
        empty: String,
    }

    let data = Data {
        normal: "hello world".to_string(),
        with_comma: "hello,world".to_string(),
        with_spaces: " padded ".to_string(),
        boolean_like: "true".to_string(),
        number_like: "123".to_string(),
        empty: "".to_string(),
    };

    let toon = to_string(&data).unwrap();
    println!("Quoting test:\n{}", toon);

    assert!(toon.contains("\"hello,world\""));
    assert!(toon.contains("\" padded \""));
    assert!(toon.contains("\"true\""));
    assert!(toon.contains("\"123\""));
    assert!(toon.contains("\"\""));
    assert!(toon.contains("hello world"));
}
