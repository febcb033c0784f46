use docpath::errors::ErrorKind;
use docpath_int_test::test_util::create_test_context;

const ODD_PATHS: [&str; 3] = ["users", "users/u1/posts", "a/b/c/d/e"];
const EVEN_PATHS: [&str; 3] = ["users/u1", "users/u1/posts/p1", "a/b/c/d"];

#[test]
fn explicit_id_follows_parity() {
    let ctx = create_test_context().unwrap();
    let resolver = ctx.db().resolver();

    for path in ODD_PATHS {
        let reference = resolver.resolve_for_create(path, Some("x")).unwrap();
        assert_eq!(reference.path().to_string(), format!("{}/x", path));
        assert!(reference.path().is_even());
    }
    for path in EVEN_PATHS {
        let reference = resolver.resolve_for_create(path, Some("x")).unwrap();
        assert_eq!(reference.path().to_string(), format!("{}/x", path));
        assert_eq!(reference.id(), "x");
        assert_eq!(reference.parent().path().to_string(), path);
    }
}

#[test]
fn auto_id_only_for_flat_paths() {
    let ctx = create_test_context().unwrap();
    let db = ctx.db();

    let reference = db.create_reference_only("users", None).unwrap();
    assert_eq!(reference.parent().id(), "users");
    assert_eq!(reference.id().len(), 20);

    for path in EVEN_PATHS.iter().chain(&ODD_PATHS[1..]) {
        let err = db.create_reference_only(path, None).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::InvalidPath);
    }
}

#[test]
fn bare_paths_resolve_iff_odd() {
    let ctx = create_test_context().unwrap();
    let resolver = ctx.db().resolver();

    for path in ODD_PATHS {
        let reference = resolver.resolve_document(path, None).unwrap();
        assert_eq!(reference.path().to_string(), path);
    }
    for path in EVEN_PATHS {
        let err = resolver.resolve_document(path, None).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::InvalidPath);
    }
}

#[test]
fn listing_goes_to_the_enclosing_collection() {
    let ctx = create_test_context().unwrap();
    let resolver = ctx.db().resolver();

    assert_eq!(resolver.resolve_collection("users").unwrap().path().to_string(), "users");
    assert_eq!(resolver.resolve_collection("users/u1").unwrap().path().to_string(), "users");
    assert_eq!(
        resolver.resolve_collection("users/u1/posts/p1").unwrap().path().to_string(),
        "users/u1/posts"
    );
}

#[test]
fn malformed_input_is_rejected() {
    let ctx = create_test_context().unwrap();
    let db = ctx.db();

    for (path, id) in [("", None), ("users//x", None), ("users", Some("")), ("users", Some("a/b"))] {
        let err = db.create_reference_only(path, id).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::InvalidPath);
    }
}
