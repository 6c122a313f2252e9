use optional_value::{Optional, OptionalError};
use std::cell::Cell;
use std::panic;

#[test]
fn test_filter() -> Result<(), OptionalError> {
    let o1 = Optional::of(Some("value".to_string()))?;
    let o2: Optional<String> = Optional::empty();

    let r1 = o1.clone().filter(Some(|_: &String| true))?;
    let r2 = o1.clone().filter(Some(|_: &String| false))?;
    let r3 = o2.clone().filter(Some(|_: &String| true))?;
    let r4 = o2.clone().filter(Some(|_: &String| false))?;

    assert_eq!(r1, o1);
    assert_ne!(r2, o1);
    assert_eq!(r3, o2);
    assert_eq!(r4, o2);

    assert!(r1.is_present());
    assert!(r2.is_empty());
    assert!(r3.is_empty());
    assert!(r4.is_empty());

    // The predicate is checked even when there is nothing to test
    let result = o1.filter(None::<fn(&String) -> bool>);
    assert!(matches!(result, Err(OptionalError::NullReference(_))));
    let result = o2.filter(None::<fn(&String) -> bool>);
    assert!(matches!(result, Err(OptionalError::NullReference(_))));
    Ok(())
}

#[test]
fn test_filter_skips_predicate_when_empty() -> Result<(), OptionalError> {
    let calls = Cell::new(0);
    Optional::<i32>::empty().filter(Some(|_: &i32| {
        calls.set(calls.get() + 1);
        true
    }))?;

    assert_eq!(calls.get(), 0);
    Ok(())
}

#[test]
fn test_map() -> Result<(), OptionalError> {
    let o1 = Optional::of(Some("p"))?;
    let o2: Optional<&str> = Optional::empty();

    let r1 = o1.map(Some(|_: &str| Some("m")))?;
    let r2 = o1.map(Some(|_: &str| None::<&str>))?;
    let r3 = o2.map(Some(|_: &str| Some("m")))?;

    assert_ne!(r1, o1);
    assert_ne!(r2, o1);
    assert_eq!(r3, o2);

    assert_eq!(r1.or_else(Some("d")), Some("m"));
    assert_eq!(r2.or_else(Some("d")), Some("d"));
    assert_eq!(r3.or_else(Some("d")), Some("d"));

    let result = o1.map(None::<fn(&str) -> Option<&str>>);
    assert!(matches!(result, Err(OptionalError::NullReference(_))));
    let result = o2.map(None::<fn(&str) -> Option<&str>>);
    assert!(matches!(result, Err(OptionalError::NullReference(_))));
    Ok(())
}

#[test]
fn test_map_identity_and_type_change() -> Result<(), OptionalError> {
    let words = vec!["a".to_string(), "bc".to_string()];
    let o1 = Optional::of(Some(words.clone()))?;

    let same = o1.clone().map(Some(|v: Vec<String>| Some(v)))?;
    assert_eq!(same.get()?, &words);

    let lengths = o1.map(Some(|v: Vec<String>| Some(v.iter().map(String::len).sum::<usize>())))?;
    assert_eq!(lengths, Optional::Present(3));
    Ok(())
}

#[test]
fn test_map_skips_mapper_when_empty() -> Result<(), OptionalError> {
    let calls = Cell::new(0);
    let result = Optional::<i32>::empty().map(Some(|v: i32| {
        calls.set(calls.get() + 1);
        Some(v)
    }))?;

    assert!(result.is_empty());
    assert_eq!(calls.get(), 0);
    Ok(())
}

#[test]
fn test_flat_map() -> Result<(), OptionalError> {
    let o1 = Optional::of(Some(2))?;
    let o2: Optional<i32> = Optional::empty();
    let mapped_present = Optional::of(Some("mapped"))?;
    let mapped_empty: Optional<&str> = Optional::empty();

    let r1 = o1.flat_map(Some(|_: i32| Some(mapped_present)))?;
    let r2 = o1.flat_map(Some(|_: i32| Some(mapped_empty)))?;
    let r3 = o2.flat_map(Some(|_: i32| Some(mapped_present)))?;
    let r4 = o2.flat_map(Some(|_: i32| Some(mapped_empty)))?;
    let r5 = o2.flat_map(Some(|_: i32| None::<Optional<&str>>))?;

    assert_eq!(r1, mapped_present);
    assert_eq!(r2, mapped_empty);
    assert_ne!(r3, mapped_present);
    assert_eq!(r4, mapped_empty);

    assert!(r3.is_empty());
    assert!(r4.is_empty());
    assert!(r5.is_empty());

    // The mapper must produce a container when it runs
    let result = o1.flat_map(Some(|_: i32| None::<Optional<&str>>));
    assert!(matches!(result, Err(OptionalError::NullReference(_))));

    let result = o1.flat_map(None::<fn(i32) -> Option<Optional<&'static str>>>);
    assert!(matches!(result, Err(OptionalError::NullReference(_))));
    let result = o2.flat_map(None::<fn(i32) -> Option<Optional<&'static str>>>);
    assert!(matches!(result, Err(OptionalError::NullReference(_))));
    Ok(())
}

#[test]
fn test_flat_map_does_not_rewrap() -> Result<(), OptionalError> {
    let nested = Optional::of(Some(10u32))?
        .flat_map(Some(|v: u32| Some(Optional::of_nullable(v.checked_sub(20)))))?;

    assert!(nested.is_empty());
    Ok(())
}

#[test]
fn test_flat_map_failure_reported_through_fallback() -> Result<(), OptionalError> {
    #[derive(Debug, PartialEq)]
    enum ParseError {
        Invalid(String),
        Optional(OptionalError),
    }

    impl From<OptionalError> for ParseError {
        fn from(err: OptionalError) -> Self {
            ParseError::Optional(err)
        }
    }

    let failed = Cell::new(None);
    let parsed = Optional::of(Some("nope"))?.flat_map(Some(|s: &str| match s.parse::<u8>() {
        Ok(v) => Some(Optional::of_nullable(Some(v))),
        Err(_) => {
            failed.set(Some(s.to_string()));
            Some(Optional::empty())
        }
    }))?;

    let result = parsed.or_else_throw(Some(|| failed.take().map(ParseError::Invalid)));
    assert_eq!(result, Err(ParseError::Invalid("nope".to_string())));
    Ok(())
}

#[test]
fn test_panicking_predicate_propagates() {
    let result = panic::catch_unwind(|| {
        Optional::of_nullable(Some(1)).filter(Some(|_: &i32| -> bool { panic!("predicate failed") }))
    });
    assert!(result.is_err());
}

#[test]
fn test_panicking_mapper_propagates() {
    let result = panic::catch_unwind(|| {
        Optional::of_nullable(Some(1)).map(Some(|_: i32| -> Option<i32> { panic!("mapper failed") }))
    });
    assert!(result.is_err());
}

#[test]
fn test_panicking_flat_mapper_propagates() {
    let result = panic::catch_unwind(|| {
        Optional::of_nullable(Some(1))
            .flat_map(Some(|_: i32| -> Option<Optional<i32>> { panic!("mapper failed") }))
    });
    assert!(result.is_err());
}
