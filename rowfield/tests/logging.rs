use rowfield::{logger, Record, RowExt};

#[test]
fn test_logger_installs_once() {
    assert!(logger::init().is_ok());
    assert!(logger::init().is_err());
    assert!(logger::init_json().is_err());

    // Recovered conversions log through the installed subscriber.
    let row = Record::new().with("n", "x");
    assert_eq!(row.value::<i64>(0).unwrap(), 0);
}
