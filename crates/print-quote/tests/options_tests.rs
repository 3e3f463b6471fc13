use print_quote::*;

#[test]
fn test_default_spec_is_valid() {
    let spec = JobSpecification::default();
    assert!(spec.validate().is_ok());
    assert_eq!(spec.size, SheetSize::A4);
    assert_eq!(spec.inner_paper, PaperStock::new("woodfree", 100));
    assert_eq!(spec.cover_paper, PaperStock::new("art", 200));
    assert!(spec.double_sided);
    assert_eq!(spec.bind, BindType::Perfect);
    assert_eq!(spec.cover_pages, 4);
    assert_eq!(spec.inner_pages, 0);
}

#[test]
fn test_validation_bad_cover_pages() {
    let mut spec = JobSpecification::default();

    spec.cover_pages = 2;
    assert!(spec.validate().is_ok());
    spec.cover_pages = 4;
    assert!(spec.validate().is_ok());

    spec.cover_pages = 3;
    let result = spec.validate();
    assert!(result.is_err());
    match result {
        Err(QuoteError::Spec(msg)) => assert!(msg.contains("2 or 4")),
        _ => panic!("Expected Spec error"),
    }

    spec.cover_pages = 0;
    assert!(spec.validate().is_err());
}

#[test]
fn test_validation_missing_paper() {
    let mut spec = JobSpecification::default();
    spec.inner_paper.name.clear();
    assert!(spec.validate().is_err());

    let mut spec = JobSpecification::default();
    spec.cover_paper.name.clear();
    assert!(spec.validate().is_err());
}

#[test]
fn test_size_classification() {
    // Exact trims
    assert_eq!(SheetSize::from_dimensions_mm(210, 297), SheetSize::A4);
    assert_eq!(SheetSize::from_dimensions_mm(148, 210), SheetSize::A5);
    assert_eq!(SheetSize::from_dimensions_mm(182, 257), SheetSize::B5);

    // Custom trims snap by width
    assert_eq!(SheetSize::from_dimensions_mm(150, 200), SheetSize::A5);
    assert_eq!(SheetSize::from_dimensions_mm(160, 230), SheetSize::A5);
    assert_eq!(SheetSize::from_dimensions_mm(190, 260), SheetSize::B5);
    assert_eq!(SheetSize::from_dimensions_mm(200, 280), SheetSize::B5);
    assert_eq!(SheetSize::from_dimensions_mm(205, 290), SheetSize::A4);
    assert_eq!(SheetSize::from_dimensions_mm(250, 350), SheetSize::A4);
}

#[test]
fn test_category_keys_round_trip() {
    let categories = [
        ProductionCategory::SmallDigitalFlyer,
        ProductionCategory::LargeOffsetFlyer,
        ProductionCategory::SmallDigitalColorBook,
        ProductionCategory::SmallDigitalMonoBook,
        ProductionCategory::LargeOffsetBook,
    ];
    for category in categories {
        assert_eq!(ProductionCategory::from_key(category.key()), Some(category));
    }
    assert_eq!(ProductionCategory::from_key("banner"), None);
}

#[test]
fn test_flyer_and_book_kinds() {
    assert!(ProductionCategory::SmallDigitalFlyer.is_flyer());
    assert!(ProductionCategory::LargeOffsetFlyer.is_flyer());
    assert!(ProductionCategory::SmallDigitalColorBook.is_book());
    assert!(ProductionCategory::SmallDigitalMonoBook.is_book());
    assert!(ProductionCategory::LargeOffsetBook.is_book());
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_spec() {
    use tempfile::NamedTempFile;

    let mut spec = JobSpecification::default();
    spec.size = SheetSize::A5;
    spec.inner_paper = PaperStock::new("snow", 120);
    spec.inner_color = ColorMode::Mono;
    spec.bind = BindType::Saddle;
    spec.coating = Coating::Matte;
    spec.cover_pages = 2;
    spec.inner_pages = 96;

    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    spec.save(path).await.unwrap();
    let loaded = JobSpecification::load(path).await.unwrap();

    assert_eq!(loaded, spec);
}

#[cfg(feature = "serde")]
#[test]
fn test_spec_json_uses_back_office_tokens() {
    let spec = JobSpecification::default();
    let json = serde_json::to_value(&spec).unwrap();
    assert_eq!(json["size"], "a4");
    assert_eq!(json["inner_color"], "color");
    assert_eq!(json["bind"], "perfect");
    assert_eq!(json["coating"], "none");
}

#[cfg(feature = "serde")]
#[test]
fn test_spec_json_missing_fields_default() {
    let spec: JobSpecification = serde_json::from_str(r#"{"inner_pages": 64}"#).unwrap();
    assert_eq!(spec.inner_pages, 64);
    assert_eq!(spec.size, SheetSize::A4);
    assert_eq!(spec.cover_pages, 4);
}
