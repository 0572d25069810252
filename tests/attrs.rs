use std::any::Any;

use maybetype::{Attrs, Just, Maybe, Nothing};

#[derive(Attrs, Clone, Debug)]
struct Endpoint {
    host: String,
    port: u16,
    #[attr(rename = "tls")]
    use_tls: bool,
    #[attr(skip)]
    token: String,
}

#[derive(Attrs)]
struct Pair(i32, &'static str);

#[derive(Attrs)]
struct Keyword {
    r#type: u8,
}

#[derive(Attrs)]
struct Boxed<T: Any> {
    inner: T,
}

fn endpoint() -> Endpoint {
    Endpoint {
        host: "localhost".to_owned(),
        port: 8080,
        use_tls: false,
        token: "secret".to_owned(),
    }
}

#[test]
fn reads_derived_attributes() {
    let ep = Just(endpoint());

    assert_eq!(ep.attr_or("host", String::new()), "localhost");
    assert_eq!(ep.attr_or("port", 0_u16), 8080);
    assert_eq!(ep.attr::<u16>("port"), Just(&8080));
}

#[test]
fn respects_rename_and_skip() {
    let ep = endpoint();

    assert!(ep.has_attr("tls"));
    assert!(!ep.has_attr("use_tls"));
    assert!(!ep.has_attr("token"));
    assert_eq!(ep.token, "secret");
    assert!(!Just(&ep).attr_or("tls", true));
}

#[test]
fn missing_or_mistyped_attribute_defaults() {
    let ep = Just(endpoint());

    assert_eq!(ep.attr_or("path", "/"), "/");
    assert_eq!(ep.attr_or("port", 1_u32), 1);
    assert_eq!(ep.attr::<String>("port"), Nothing);
}

#[test]
fn nothing_always_defaults() {
    let ep = Maybe::<Endpoint>::Nothing;

    assert_eq!(ep.attr_or("port", 1_u16), 1);
    assert_eq!(ep.attr::<u16>("port"), Nothing);
}

#[test]
fn exposes_tuple_fields_by_index() {
    let pair = Just(Pair(1, "one"));

    assert_eq!(pair.attr_or("0", 0), 1);
    assert_eq!(pair.attr_or("1", ""), "one");
    assert_eq!(pair.attr_or("2", 0), 0);
}

#[test]
fn strips_raw_identifier_prefix() {
    let kw = Just(Keyword { r#type: 3 });

    assert_eq!(kw.attr_or("type", 0_u8), 3);
    assert_eq!(kw.attr_or("r#type", 0_u8), 0);
}

#[test]
fn supports_generic_structs() {
    let boxed = Just(Boxed { inner: vec![1, 2] });

    assert_eq!(boxed.attr::<Vec<i32>>("inner").get(&1).copied(), Just(2));
}

#[test]
fn works_through_trait_objects() {
    let objects: Vec<Box<dyn Attrs>> = vec![
        Box::new(endpoint()),
        Box::new(Pair(7, "seven")),
    ];

    let ports: Vec<u16> = objects
        .iter()
        .map(|o| Just(o).attr_or("port", 0_u16))
        .collect();

    assert_eq!(ports, [8080, 0]);
}
