use rect_wrap::layout::Alignment;
use rect_wrap::{LayoutParams, Pt, WrappingCollection};
use tracing_subscriber::EnvFilter;

// a rough monospace advance, standing in for real font metrics
const CHAR_WIDTH: f32 = 9.0;
const LINE_HEIGHT: f32 = 16.0;

fn main() -> Result<(), rect_wrap::WrapError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // usage: wrap-words [alignment] [wrap width]
    let mut args = std::env::args().skip(1);
    let alignments = match args.next() {
        Some(name) => vec![name.parse::<Alignment>()?],
        None => vec![
            Alignment::Left,
            Alignment::Center,
            Alignment::Right,
            Alignment::Justified,
        ],
    };
    let wrap: f32 = args.next().and_then(|w| w.parse().ok()).unwrap_or(400.0);

    let mut params = LayoutParams::new();
    params.wrap_width(wrap).default_min_space(CHAR_WIDTH);
    let mut collection = WrappingCollection::new(params);

    let text = lipsum::lipsum(60);
    let words: Vec<&str> = text.split_whitespace().collect();
    for word in words.iter() {
        collection.add_box(word.chars().count() as f32 * CHAR_WIDTH, LINE_HEIGHT, None)?;
    }
    tracing::info!("added {} words, wrapping at {}", collection.len(), Pt(wrap));

    for alignment in alignments {
        collection.set_alignment(alignment);
        println!("== {} ({} lines)", alignment, collection.line_count());
        for (word, (x, y)) in words.iter().zip(collection.compute_positions()) {
            println!("{:>8.2} {:>8.2}  {}", x.0, y.0, word);
        }
    }

    if let Some(bounds) = collection.bounds() {
        println!("bounds: {} x {}", bounds.width(), bounds.height());
    }

    Ok(())
}
