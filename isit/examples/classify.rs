//! Walkthrough of the value and string predicates

use isit::{
    is_array, is_cellphone, is_chinese, is_email, is_empty, is_false, is_html, is_json, is_leap,
    is_lower_cased, is_object, is_primitive, is_upper_cased, parse_value, Value,
};

fn main() {
    println!("Value classification:");
    let values = [
        Value::from(vec![Value::Number(1.0), Value::Number(2.0)]),
        Value::Object(Default::default()),
        Value::from("text"),
        Value::from(3.5),
        Value::Null,
        Value::Undefined,
    ];
    for value in &values {
        println!(
            "   {:?}: kind={} array={} object={} primitive={} empty={} false={}",
            value,
            value.kind(),
            is_array(value),
            is_object(value),
            is_primitive(value),
            is_empty(value),
            is_false(value)
        );
    }

    println!("\nFormat validators:");
    for candidate in ["a@b.com", "not-an-email", "Upper@Case.com"] {
        println!("   is_email({candidate:?}) = {}", is_email(candidate));
    }
    for candidate in ["13812345678", "12812345678", "1381234567"] {
        println!("   is_cellphone({candidate:?}) = {}", is_cellphone(candidate));
    }
    for candidate in ["<div>hello</div>", "<br />", "<div>"] {
        println!("   is_html({candidate:?}) = {}", is_html(candidate));
    }
    for candidate in ["中文", "中文abc"] {
        println!("   is_chinese({candidate:?}) = {}", is_chinese(candidate));
    }
    for candidate in ["{\"a\": 1}", "[1, 2]", "\"scalar\"", "not json"] {
        println!("   is_json({candidate:?}) = {}", is_json(candidate));
    }

    println!("\nCase and calendar checks:");
    println!("   is_upper_cased(\"ABC123\") = {}", is_upper_cased("ABC123"));
    println!("   is_lower_cased(\"MiXeD\") = {}", is_lower_cased("MiXeD"));
    for year in [2000, 1900, 2024, 2023] {
        println!("   is_leap({year}) = {}", is_leap(year));
    }

    println!("\nParsed JSON flows through the same value predicates:");
    match parse_value("{\"name\": \"ada\", \"tags\": []}") {
        Ok(root) => println!(
            "   root kind={} object={} empty={}",
            root.kind(),
            is_object(&root),
            is_empty(&root)
        ),
        Err(err) => println!("   parse failed: {err}"),
    }
}
