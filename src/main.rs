use streamkit::{Pipeline, source::IterSource, transform::BufferCount};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let source = IterSource::new(1..=8);

    let batches = Pipeline::open(&source)
        .await?
        .transform(BufferCount::new(3)?)
        .collect()
        .await?;

    for batch in batches {
        println!("{batch:?}");
    }

    Ok(())
}
