// Example: a mounted table driven by host events, with a filter and row reconciliation.
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use snapwindow_table::{
    EventHub, ItemFilter, SortedSource, TableOptions, TableView, TableWindow,
};

struct Node {
    id: u64,
    name: String,
}

struct Nodes {
    items: Vec<Node>,
    focus: Cell<(usize, usize)>,
}

impl SortedSource for Nodes {
    type Item = Node;
    type Key = u64;

    fn sorted(&self) -> &[Node] {
        &self.items
    }

    fn key_of(&self, item: &Node) -> u64 {
        item.id
    }

    fn set_focus(&self, start: usize, end: usize) {
        self.focus.set((start, end));
    }
}

fn print_view(label: &str, view: &TableView<'_, Node, u64>, nodes: &Nodes) {
    match view {
        TableView::NoMatches => println!("{label}: nothing matches"),
        TableView::Rows(rows) => println!(
            "{label}: rows={} first={:?} offset_y={} height={} focus={:?}",
            rows.len(),
            rows.rows.first().map(|r| &r.item.name),
            rows.offset_y,
            rows.content_height,
            nodes.focus.get(),
        ),
    }
}

fn main() {
    let nodes = Nodes {
        items: (0..1_000)
            .map(|i| Node {
                id: i,
                name: format!("node-{i:04}"),
            })
            .collect(),
        focus: Cell::new((0, 0)),
    };

    let hub = Rc::new(EventHub::new(600));
    let table = Rc::new(RefCell::new(
        TableWindow::new(
            TableOptions::default().with_on_change(Some(|t: &TableWindow<Node>| {
                println!("  on_change: window={:?}", t.window());
            })),
            600,
        )
        .expect("default geometry is valid"),
    ));
    let mount = TableWindow::mount(&table, &hub);

    print_view("top", &table.borrow().render(&nodes), &nodes);

    let prev = match table.borrow().render(&nodes) {
        TableView::Rows(rows) => rows.keys(),
        TableView::NoMatches => Vec::new(),
    };
    hub.scroll_to(5_000);
    {
        let t = table.borrow();
        let view = t.render(&nodes);
        print_view("scrolled", &view, &nodes);
        if let Some(rows) = view.as_rows() {
            let diff = rows.diff_from(&prev);
            println!(
                "  diff: entered={} exited={} retained={}",
                diff.entered.len(),
                diff.exited.len(),
                diff.retained
            );
        }
    }

    table
        .borrow_mut()
        .set_filter(ItemFilter::new(|n: &Node| n.name.ends_with('7')));
    print_view("filtered", &table.borrow().render(&nodes), &nodes);

    table
        .borrow_mut()
        .set_filter(ItemFilter::new(|n: &Node| n.name.is_empty()));
    print_view("no matches", &table.borrow().render(&nodes), &nodes);

    mount.unmount();
    println!("listeners after unmount: {}", hub.listener_count());
}
