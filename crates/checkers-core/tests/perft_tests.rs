use checkers_core::perft::perft_root;

#[test]
fn test_perft() {
    let nodes = perft_root(5);
    assert_eq!(nodes, 7_361);
}

#[test]
fn test_perft_depth_4() {
    assert_eq!(perft_root(4), 1_469);
}
