use hexshift::{AnimationSpec, ColorStop, Gradient, GradientSet, generate_document};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let gradient = Gradient::new(vec![
        ColorStop::from_hex(0.00, "#3B28CC")?,
        ColorStop::from_hex(0.33, "#3E7FF5")?,
        ColorStop::from_hex(0.66, "#63A2F8")?,
        ColorStop::from_hex(1.00, "#71AAF6")?,
    ]);
    let spec = AnimationSpec {
        text: "play.example.net".to_owned(),
        frames: 12,
        ..AnimationSpec::default()
    };

    let yaml = generate_document(&GradientSet::single(gradient), &spec)?;
    print!("{yaml}");
    Ok(())
}
