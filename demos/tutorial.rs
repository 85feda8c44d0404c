use pagerank::{PageRanker, DEFAULT_DAMPING};

const ITERATIONS: usize = 100;

fn main() -> pagerank::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // Every page links to every other page, so all ranks end up equal.
    let complete = [
        [0.0, 1.0, 1.0, 1.0],
        [1.0, 0.0, 1.0, 1.0],
        [1.0, 1.0, 0.0, 1.0],
        [1.0, 1.0, 1.0, 0.0],
    ];

    // The tutorial exercise: page 0 links to 1, page 1 links to 0 and 2, page 2 links to 0.
    let tutorial = [[0.0, 1.0, 0.0], [1.0, 0.0, 1.0], [1.0, 0.0, 0.0]];

    println!("\nRanking the complete web...");
    let mut ranker = PageRanker::from_rows(DEFAULT_DAMPING, &complete)?;
    ranker.improve_guess(ITERATIONS);
    println!("{}", ranker.page_rank());

    println!("Ranking the tutorial web...");
    let mut ranker = PageRanker::from_rows(DEFAULT_DAMPING, &tutorial)?;
    ranker.improve_guess(ITERATIONS);
    println!("{}", ranker.page_rank());

    for (node, rank) in ranker.top_n(tutorial.len()) {
        println!("page {node}: {rank:.4}");
    }

    Ok(())
}
