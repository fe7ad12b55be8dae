//! Unit tests for the predicate library

use introspection::{
    get_value_by_key, is_falsy, is_not_empty_array, is_not_empty_map, is_not_empty_set,
    is_not_empty_string, is_nullish, is_primitive, is_real_number,
};
use value_types::Value;

#[cfg(test)]
mod emptiness_tests {
    use super::*;

    #[test]
    fn test_is_not_empty_string() {
        assert!(!is_not_empty_string(&Value::string("")));
        assert!(is_not_empty_string(&Value::string("text")));
        assert!(is_not_empty_string(&Value::string("x")));
        // Non-strings report false regardless of content.
        assert!(!is_not_empty_string(&Value::number(123.0)));
        assert!(!is_not_empty_string(&Value::null()));
        assert!(!is_not_empty_string(&Value::undefined()));
        assert!(!is_not_empty_string(&Value::boxed_string("text")));
    }

    #[test]
    fn test_is_not_empty_array() {
        assert!(!is_not_empty_array(&Value::array()));
        assert!(is_not_empty_array(&Value::array_from(vec![
            Value::number(1.0),
            Value::number(2.0),
        ])));
        assert!(is_not_empty_array(&Value::array_from(vec![Value::null()])));
        // An object with a length property is not an array.
        let fake = Value::object_from(vec![("length".to_string(), Value::number(0.0))]);
        assert!(!is_not_empty_array(&fake));
        assert!(!is_not_empty_array(&Value::string("array")));
    }

    #[test]
    fn test_is_not_empty_set() {
        assert!(!is_not_empty_set(&Value::set_collection()));
        assert!(is_not_empty_set(&Value::set_from(vec![Value::number(1.0)])));
        assert!(!is_not_empty_set(&Value::array_from(vec![Value::number(1.0)])));
    }

    #[test]
    fn test_is_not_empty_map() {
        assert!(!is_not_empty_map(&Value::map()));
        assert!(is_not_empty_map(&Value::map_from(vec![(
            Value::string("key"),
            Value::string("value"),
        )])));
        assert!(!is_not_empty_map(&Value::object_from(vec![(
            "key".to_string(),
            Value::string("value"),
        )])));
    }
}

#[cfg(test)]
mod kind_check_tests {
    use super::*;

    #[test]
    fn test_is_nullish() {
        assert!(is_nullish(&Value::null()));
        assert!(is_nullish(&Value::undefined()));
        assert!(!is_nullish(&Value::number(0.0)));
        assert!(!is_nullish(&Value::string("")));
        assert!(!is_nullish(&Value::boolean(false)));
    }

    #[test]
    fn test_is_primitive() {
        assert!(is_primitive(&Value::null()));
        assert!(is_primitive(&Value::undefined()));
        assert!(is_primitive(&Value::number(1.0)));
        assert!(is_primitive(&Value::bigint(1)));
        assert!(is_primitive(&Value::string("s")));
        assert!(is_primitive(&Value::boolean(true)));
        assert!(is_primitive(&Value::symbol(None)));

        assert!(!is_primitive(&Value::object()));
        assert!(!is_primitive(&Value::array()));
        assert!(!is_primitive(&Value::function("f")));
        // Boxing a primitive produces a different reference value.
        assert!(!is_primitive(&Value::boxed_number(1.0)));
        assert!(!is_primitive(&Value::boxed_bigint(1)));
    }

    #[test]
    fn test_is_falsy() {
        assert!(is_falsy(&Value::number(0.0)));
        assert!(is_falsy(&Value::number(f64::NAN)));
        assert!(is_falsy(&Value::string("")));
        assert!(is_falsy(&Value::boolean(false)));
        assert!(is_falsy(&Value::null()));
        assert!(is_falsy(&Value::undefined()));
        assert!(is_falsy(&Value::bigint(0)));

        assert!(!is_falsy(&Value::string("a")));
        assert!(!is_falsy(&Value::number(-1.0)));
        // Objects are never falsy, empty or not.
        assert!(!is_falsy(&Value::array()));
        assert!(!is_falsy(&Value::boxed_boolean(false)));
    }

    #[test]
    fn test_is_real_number() {
        assert!(is_real_number(&Value::number(-1.5)));
        assert!(is_real_number(&Value::number(0.0)));
        assert!(is_real_number(&Value::number(f64::INFINITY)));
        assert!(!is_real_number(&Value::number(f64::NAN)));
        // Numeric strings and boxed numbers are not numbers.
        assert!(!is_real_number(&Value::string("1")));
        assert!(!is_real_number(&Value::boxed_number(1.0)));
        assert!(!is_real_number(&Value::bigint(1)));
    }
}

#[cfg(test)]
mod keyed_lookup_tests {
    use super::*;

    #[test]
    fn test_get_value_by_key_passes_through() {
        let record = Value::object_from(vec![
            ("name".to_string(), Value::string("taxon")),
            ("count".to_string(), Value::number(2.0)),
        ]);
        assert_eq!(
            get_value_by_key(&record, "name"),
            Some(Value::string("taxon"))
        );
        assert_eq!(
            get_value_by_key(&record, "count"),
            Some(Value::number(2.0))
        );
        assert_eq!(get_value_by_key(&record, "missing"), None);
    }

    #[test]
    fn test_get_value_by_key_on_instances() {
        let point = Value::instance_from(
            "Point",
            vec![
                ("x".to_string(), Value::number(1.0)),
                ("y".to_string(), Value::number(2.0)),
            ],
        );
        assert_eq!(get_value_by_key(&point, "y"), Some(Value::number(2.0)));
    }

    #[test]
    fn test_get_value_by_key_on_non_records() {
        assert_eq!(get_value_by_key(&Value::number(1.0), "k"), None);
        assert_eq!(get_value_by_key(&Value::null(), "k"), None);
        assert_eq!(get_value_by_key(&Value::array(), "k"), None);
    }
}
