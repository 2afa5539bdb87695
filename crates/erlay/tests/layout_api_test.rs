//! Integration tests for the public layout API
//!
//! These tests lay out small ER-style diagrams end to end and check the
//! guarantees a renderer relies on.

use erlay::{
    Edge, LayoutError, Layouter, Node, StrategyKind,
    config::{AppConfig, CanvasConfig, ForceConfig, LayoutConfig},
};
use erlay_core::{
    geometry::{CanvasExtent, Position, Size},
    node::{HasGeometry, HasId},
};

/// Returns the first pair of nodes closer than `gap` on both axes.
fn find_overlap<N: HasId + HasGeometry>(nodes: &[N], gap: f64) -> Option<(String, String)> {
    for (i, a) in nodes.iter().enumerate() {
        for b in &nodes[i + 1..] {
            let ca = a.position().center(a.size());
            let cb = b.position().center(b.size());
            let min_dx = f64::from(a.size().width() + b.size().width()) / 2.0 + gap;
            let min_dy = f64::from(a.size().height() + b.size().height()) / 2.0 + gap;
            if (ca.x() - cb.x()).abs() < min_dx && (ca.y() - cb.y()).abs() < min_dy {
                return Some((a.id().to_string(), b.id().to_string()));
            }
        }
    }
    None
}

fn boxes(ids: &[&str], size: Size) -> Vec<Node> {
    ids.iter().map(|id| Node::new(*id, size)).collect()
}

#[test]
fn test_empty_input_returns_minimum() {
    let mut nodes: Vec<Node> = Vec::new();
    let extent = erlay::layout(&mut nodes, &[] as &[Edge], &AppConfig::default())
        .expect("empty input is valid");
    assert_eq!(extent, CanvasExtent::new(800, 600));
}

#[test]
fn test_unconnected_nodes_form_grid_column() {
    let mut nodes = boxes(&["a", "b", "c"], Size::new(100, 50));

    let extent = erlay::layout(&mut nodes, &[] as &[Edge], &AppConfig::default())
        .expect("valid input");

    // floor(sqrt(3)) = 1 column, pitch 1.5 * 180
    assert_eq!(nodes[0].position(), Position::new(50, 50));
    assert_eq!(nodes[1].position(), Position::new(50, 320));
    assert_eq!(nodes[2].position(), Position::new(50, 590));
    assert_eq!(extent, CanvasExtent::new(800, 690));
}

#[test]
fn test_connected_pair_stays_close_without_overlap() {
    let mut nodes = boxes(&["users", "orders"], Size::new(200, 100));
    let edges = vec![Edge::new("orders", "users")];

    erlay::layout(&mut nodes, &edges, &AppConfig::default()).expect("valid input");

    let ideal = 200.0 * 1.8;
    let a = nodes[0].position().center(nodes[0].size());
    let b = nodes[1].position().center(nodes[1].size());
    let distance = a.sub_point(b).hypot();

    assert!(distance < 2.0 * ideal, "distance {distance}");
    assert_eq!(find_overlap(&nodes, 30.0), None);
}

#[test]
fn test_cycle_with_isolated_node() {
    let mut nodes = boxes(&["a", "b", "c", "d"], Size::new(200, 100));
    let edges = vec![Edge::new("a", "b"), Edge::new("b", "c"), Edge::new("c", "a")];

    erlay::layout(&mut nodes, &edges, &AppConfig::default()).expect("valid input");

    let cluster_right = nodes[..3]
        .iter()
        .map(|n| n.position().x())
        .max()
        .expect("non-empty cluster");
    assert!(nodes[3].position().x() >= cluster_right + 200);
    assert_eq!(find_overlap(&nodes, 30.0), None);
}

#[test]
fn test_uneven_pair_keeps_gap() {
    let mut nodes = vec![
        Node::new("big", Size::new(400, 200)),
        Node::new("small", Size::new(100, 50)),
    ];
    let edges = vec![Edge::new("small", "big")];

    erlay::layout(&mut nodes, &edges, &AppConfig::default()).expect("valid input");

    let (big, small) = (&nodes[0], &nodes[1]);
    let gap_x = (small.position().x() - (big.position().x() + 400))
        .max(big.position().x() - (small.position().x() + 100));
    let gap_y = (small.position().y() - (big.position().y() + 200))
        .max(big.position().y() - (small.position().y() + 50));

    assert!(gap_x.max(gap_y) >= 30, "gaps {gap_x} x {gap_y}");
}

#[test]
fn test_layout_is_deterministic() {
    let edges = vec![
        Edge::new("orders", "users"),
        Edge::new("order_items", "orders"),
        Edge::new("order_items", "products"),
        Edge::new("reviews", "products"),
        Edge::new("reviews", "users"),
    ];
    let ids = ["users", "orders", "order_items", "products", "reviews", "audit_log"];

    let mut first = boxes(&ids, Size::new(180, 120));
    let mut second = boxes(&ids, Size::new(180, 120));
    let config = AppConfig::default();

    let e1 = erlay::layout(&mut first, &edges, &config).expect("valid input");
    let e2 = erlay::layout(&mut second, &edges, &config).expect("valid input");

    assert_eq!(e1, e2);
    assert_eq!(first, second);
}

#[test]
fn test_every_node_inside_canvas() {
    let ids = ["a", "b", "c", "d", "e", "f", "g"];
    let mut nodes: Vec<Node> = ids
        .iter()
        .enumerate()
        .map(|(i, id)| Node::new(*id, Size::new(120 + 20 * i as u32, 60 + 10 * i as u32)))
        .collect();
    let edges = vec![
        Edge::new("a", "b"),
        Edge::new("a", "c"),
        Edge::new("a", "d"),
        Edge::new("e", "f"),
        Edge::new("g", "g"),
    ];

    let extent = erlay::layout(&mut nodes, &edges, &AppConfig::default()).expect("valid input");

    for node in &nodes {
        assert!(node.position().x() >= 50 && node.position().y() >= 50, "{}", node.id());
        assert!(extent.contains(node.position(), node.size()), "{}", node.id());
    }
    assert_eq!(find_overlap(&nodes, 30.0), None);
}

#[test]
fn test_unknown_endpoints_are_ignored() {
    let mut with_ghosts = boxes(&["a", "b"], Size::new(100, 100));
    let mut without = boxes(&["a", "b"], Size::new(100, 100));

    erlay::layout(
        &mut with_ghosts,
        &[("a", "b"), ("a", "ghost"), ("phantom", "b")],
        &AppConfig::default(),
    )
    .expect("valid input");
    erlay::layout(&mut without, &[("a", "b")], &AppConfig::default()).expect("valid input");

    assert_eq!(with_ghosts, without);
}

#[test]
fn test_duplicate_ids_leave_nodes_untouched() {
    let mut nodes = vec![
        Node::new("a", Size::new(100, 100)).with_position(Position::new(7, 9)),
        Node::new("a", Size::new(100, 100)),
    ];

    let result = erlay::layout(&mut nodes, &[] as &[Edge], &AppConfig::default());

    assert!(matches!(result, Err(LayoutError::DuplicateNode { .. })));
    assert_eq!(nodes[0].position(), Position::new(7, 9));
}

#[test]
fn test_invalid_config_is_rejected() {
    let layout =
        LayoutConfig::default().with_force(ForceConfig::default().with_cooling_rate(1.5));
    let config = AppConfig::default().with_layout(layout);
    let mut nodes = boxes(&["a"], Size::new(10, 10));

    let result = erlay::layout(&mut nodes, &[] as &[Edge], &config);
    assert!(matches!(result, Err(LayoutError::InvalidConfig(_))));
}

#[test]
fn test_hierarchical_through_layouter() {
    let config = AppConfig::default()
        .with_layout(LayoutConfig::default().with_strategy(StrategyKind::Hierarchical));
    let layouter = Layouter::new(config);

    let mut nodes = boxes(&["a", "b", "c"], Size::new(200, 100));
    let edges = vec![Edge::new("a", "b"), Edge::new("b", "c"), Edge::new("c", "a")];

    let extent = layouter.layout(&mut nodes, &edges).expect("valid input");

    // cycle flushes all three into level 0: a at the margin, b to its right,
    // c below the row
    assert_eq!(nodes[0].position(), Position::new(50, 50));
    assert_eq!(nodes[1].position(), Position::new(300, 50));
    assert_eq!(nodes[2].position(), Position::new(50, 200));
    assert_eq!(extent, CanvasExtent::new(800, 600));
}

#[test]
fn test_arrange_without_edges_keeps_positions() {
    let layouter = Layouter::default();
    let mut nodes = vec![
        Node::new("a", Size::new(100, 100)).with_position(Position::new(300, 900)),
    ];

    let extent = layouter.arrange(&mut nodes, &[] as &[Edge]).expect("valid input");

    assert_eq!(nodes[0].position(), Position::new(300, 900));
    assert_eq!(extent, CanvasExtent::new(800, 1050));
}

#[test]
fn test_custom_canvas() {
    let config = AppConfig::default().with_canvas(CanvasConfig::new(20, 100, 100));
    let mut nodes = boxes(&["only"], Size::new(300, 40));

    let extent = erlay::layout(&mut nodes, &[] as &[Edge], &config).expect("valid input");

    assert_eq!(nodes[0].position(), Position::new(20, 20));
    assert_eq!(extent, CanvasExtent::new(340, 100));
}

/// A renderer-side table type laid out through the adapter traits.
#[derive(Debug)]
struct Table {
    name: String,
    columns: u32,
    x: i32,
    y: i32,
}

impl HasId for Table {
    fn id(&self) -> &str {
        &self.name
    }
}

impl HasGeometry for Table {
    fn size(&self) -> Size {
        Size::new(220, 40 + 20 * self.columns)
    }

    fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }

    fn set_position(&mut self, position: Position) {
        self.x = position.x();
        self.y = position.y();
    }
}

#[test]
fn test_foreign_node_type() {
    let mut tables = vec![
        Table {
            name: "users".into(),
            columns: 4,
            x: 0,
            y: 0,
        },
        Table {
            name: "posts".into(),
            columns: 6,
            x: 0,
            y: 0,
        },
    ];
    let references = vec![("posts".to_string(), "users".to_string())];

    erlay::layout(&mut tables, &references, &AppConfig::default()).expect("valid input");

    assert!(tables.iter().all(|t| t.x >= 50 && t.y >= 50));
    assert_eq!(find_overlap(&tables, 30.0), None);
}
