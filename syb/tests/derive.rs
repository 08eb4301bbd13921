//! Behavior of `#[derive(Data)]` across struct and enum forms

use std::collections::BTreeMap;

use syb::{Alternative, Data, Payload, Shape, Traversal, everywhere, type_info};

#[derive(Data, Debug, Clone, PartialEq)]
struct Account {
    name:    String,
    #[data(skip)]
    secret:  String,
    balance: i64,
}

#[derive(Data, Debug, Clone, Copy, PartialEq)]
#[data(leaf)]
struct Celsius(i32);

#[derive(Data, Debug, Clone, PartialEq)]
struct Reading {
    label: String,
    raw:   i32,
    temp:  Celsius,
}

#[derive(Data, Debug, Clone, PartialEq)]
struct Tagged<T> {
    tag:   String,
    value: T,
}

#[derive(Data, Debug, Clone, PartialEq)]
struct Marker;

#[derive(Data, Debug, Clone, PartialEq)]
enum Shape2d {
    Point,
    Circle(i32),
    Rect { width: i32, height: i32 },
    Named { label: String, #[data(skip)] cache: String },
}

#[derive(Data, Debug, Clone, PartialEq)]
enum Expr {
    Lit(i64),
    Neg(Box<Expr>),
    Add(Box<Expr>, Box<Expr>),
}

#[test]
fn test_record_reflection() {
    let info = type_info::<Account>();
    assert_eq!(info.shape, Shape::Record);
    assert_eq!(info.fields, &["name", "balance"]);
    assert!(info.alternatives.is_empty());

    assert_eq!(Tagged::<u8>::fields(), &["tag", "value"]);
    assert!(Marker::fields().is_empty());
    assert_eq!(<Celsius as Data>::SHAPE, Shape::Scalar);
}

#[test]
fn test_skipped_field_is_never_visited() {
    let mut account = Account {
        name:    "ada".to_string(),
        secret:  "hunter2".to_string(),
        balance: 10,
    };

    let stats = everywhere(&mut account, |text: &mut String| text.clear()).ok();

    assert_eq!(account.name, "");
    assert_eq!(account.secret, "hunter2");
    assert_eq!(stats.map(|stats| stats.matched), Some(1));
}

#[test]
fn test_leaf_type_is_not_decomposed() {
    let mut reading = Reading {
        label: "probe".to_string(),
        raw:   3,
        temp:  Celsius(20),
    };

    let result = everywhere(&mut reading, |value: &mut i32| *value *= 10);
    assert!(result.is_ok());
    assert_eq!(reading.raw, 30);
    assert_eq!(reading.temp, Celsius(20));

    let result = everywhere(&mut reading, |temp: &mut Celsius| temp.0 += 1);
    assert!(result.is_ok());
    assert_eq!(reading.temp, Celsius(21));
}

#[test]
fn test_generic_record() {
    let mut subject = Tagged {
        tag:   "t".to_string(),
        value: vec![Tagged {
            tag:   "inner".to_string(),
            value: 1_u16,
        }],
    };

    let result = everywhere(&mut subject, |value: &mut u16| *value += 1);
    assert!(result.is_ok());
    assert_eq!(subject.value[0].value, 2);

    let result = everywhere(&mut subject, |inner: &mut Tagged<u16>| inner.tag.push('!'));
    assert!(result.is_ok());
    assert_eq!(subject.value[0].tag, "inner!");
    assert_eq!(subject.tag, "t");
}

#[test]
fn test_enum_alternatives() {
    let alternatives = Shape2d::alternatives();
    assert_eq!(alternatives, vec![
        Alternative::new("Point", Payload::Empty),
        Alternative::new("Circle", Payload::single::<i32>()),
        Alternative::new("Rect", Payload::Fields(2)),
        Alternative::new("Named", Payload::single::<String>()),
    ]);

    assert_eq!(Shape2d::Point.active_alternative(), Some(0));
    assert_eq!(Shape2d::Rect { width: 1, height: 2 }.active_alternative(), Some(2));
}

#[test]
fn test_active_payload() {
    let mut circle = Shape2d::Circle(4);
    let radius = circle
        .active_payload_mut()
        .and_then(|payload| payload.downcast_mut::<i32>())
        .map(|radius| *radius);
    assert_eq!(radius, Some(4));

    assert!(Shape2d::Point.active_payload_mut().is_none());
    assert!(
        Shape2d::Rect { width: 1, height: 2 }
            .active_payload_mut()
            .is_none()
    );
}

#[test]
fn test_multi_field_variant_is_decomposed() {
    let mut shapes = vec![
        Shape2d::Point,
        Shape2d::Circle(1),
        Shape2d::Rect { width: 2, height: 3 },
    ];

    let stats = everywhere(&mut shapes, |value: &mut i32| *value *= 2).ok();

    assert_eq!(shapes, vec![
        Shape2d::Point,
        Shape2d::Circle(2),
        Shape2d::Rect { width: 4, height: 6 },
    ]);
    assert_eq!(stats.map(|stats| stats.matched), Some(3));
}

#[test]
fn test_struct_variant_with_skipped_field() {
    let mut shape = Shape2d::Named {
        label: "a".to_string(),
        cache: "b".to_string(),
    };

    let result = everywhere(&mut shape, |text: &mut String| text.push('!'));
    assert!(result.is_ok());
    assert_eq!(shape, Shape2d::Named {
        label: "a!".to_string(),
        cache: "b".to_string(),
    });
}

#[test]
fn test_recursive_enum() {
    let mut expr = Expr::Add(
        Box::new(Expr::Lit(1)),
        Box::new(Expr::Neg(Box::new(Expr::Lit(2)))),
    );

    let result = everywhere(&mut expr, |value: &mut i64| *value += 10);
    assert!(result.is_ok());
    assert_eq!(
        expr,
        Expr::Add(
            Box::new(Expr::Lit(11)),
            Box::new(Expr::Neg(Box::new(Expr::Lit(12)))),
        )
    );
}

#[test]
fn test_recursive_enum_target_stops_descent() {
    let mut expr = Expr::Neg(Box::new(Expr::Neg(Box::new(Expr::Lit(2)))));
    let mut seen = 0;

    let mut traversal = Traversal::bind(|_: &mut Expr| seen += 1);
    assert!(traversal.run(&mut expr).is_ok());
    drop(traversal);

    assert_eq!(seen, 1);
}

#[test]
fn test_enum_inside_map_values() {
    let mut registry = BTreeMap::from([
        ("b".to_string(), Shape2d::Circle(2)),
        ("a".to_string(), Shape2d::Circle(1)),
    ]);
    let mut order = Vec::new();

    let mut traversal = Traversal::bind(|value: &mut i32| order.push(*value));
    assert!(traversal.run(&mut registry).is_ok());
    drop(traversal);

    assert_eq!(order, [1, 2]);
}
