use trackcode::{
    PieceType, RenderSettings, RenderThreading, TrackId, TrackPieceSpec, render_batch_with_stats,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let settings = RenderSettings::default().with_size_px(256);
    let specs: Vec<TrackPieceSpec> = PieceType::ALL
        .into_iter()
        .flat_map(|t| [1, 64, 127, 1].map(move |id| (t, id)))
        .map(|(t, id)| -> anyhow::Result<TrackPieceSpec> {
            Ok(TrackPieceSpec::new(t, TrackId::new(id)?))
        })
        .collect::<anyhow::Result<_>>()?;

    let threading = RenderThreading {
        parallel: true,
        threads: None,
        ..RenderThreading::default()
    };
    let (pieces, stats) = render_batch_with_stats(&specs, &settings, &threading)?;
    for piece in &pieces {
        println!(
            "{}: {:016x}",
            piece.meta.png_file_name(),
            piece.image.fingerprint()
        );
    }
    println!(
        "{} pieces, {} rendered, {} shared",
        stats.pieces_total, stats.pieces_rendered, stats.pieces_shared
    );
    Ok(())
}
