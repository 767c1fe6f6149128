// Example: pure window computation and the calculator's change suppression.
use snapwindow::{WindowCalculator, WindowOptions, compute_window};

fn main() {
    // 31px rows, 5 rows of margin, first row 183px below the top of the page.
    let w = compute_window(0, 600, 31, 5, 183);
    println!("at top: {w:?} (len={})", w.len());

    let w = compute_window(5_000, 600, 31, 5, 183);
    println!("scrolled: {w:?} (len={}) offset_px={}", w.len(), w.offset_px(31));

    let mut c = WindowCalculator::new(WindowOptions::default(), 600);
    for offset in [0u64, 10, 27, 28, 338, 339, 5_000] {
        let change = c.on_scroll(offset);
        println!("scroll={offset:>5} -> {change:?}");
    }
}
