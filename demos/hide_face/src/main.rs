use argh::FromArgs;
use std::path::{Path, PathBuf};

use lumaline::filter::{handle_method_call, Command, FilterEngine, FilterParams, MethodCall};
use lumaline::io::{fps_counter::FpsCounter, functional as F};

#[derive(FromArgs)]
/// Hide faces in images by replacing them with colored line marks on black
struct Args {
    /// path to an input image or a directory of images
    #[argh(option, short = 'i')]
    input: PathBuf,

    /// path to the output png, or a directory when the input is a directory
    #[argh(option, short = 'o')]
    output: PathBuf,

    /// path to a json file with the filter parameters
    #[argh(option, short = 'p')]
    params: Option<PathBuf>,

    /// override the first threshold
    #[argh(option)]
    threshold1: Option<i32>,

    /// override the second threshold
    #[argh(option)]
    threshold2: Option<i32>,

    /// output a plain black canvas without marks
    #[argh(switch)]
    no_colorful: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    // read the parameters, then apply the command line overrides
    let mut params = match &args.params {
        Some(path) => serde_json::from_reader(std::fs::File::open(path)?)?,
        None => FilterParams::default(),
    };
    if let Some(t1) = args.threshold1 {
        params.threshold1 = t1;
    }
    if let Some(t2) = args.threshold2 {
        params.threshold2 = t2;
    }
    if args.no_colorful {
        params.colorful = false;
    }

    // configure the engine through the same commands a host application would send
    let mut engine = FilterEngine::new();
    let commands = [
        Command::Initialize,
        Command::SetParams {
            threshold1: params.threshold1,
            threshold2: params.threshold2,
            colorful: params.colorful,
        },
        Command::SetEnabled { enabled: true },
    ];
    for command in commands {
        let response = handle_method_call(&mut engine, MethodCall::from(command))?;
        log::debug!("{} -> {}", command.method(), serde_json::to_string(&response)?);
    }

    let jobs = collect_jobs(&args.input, &args.output)?;
    if jobs.is_empty() {
        log::warn!("no images found in {}", args.input.display());
        return Ok(());
    }

    let mut fps_counter = FpsCounter::new();

    for (src, dst) in jobs {
        let frame = match F::read_image_any_rgba8(&src) {
            Ok(frame) => frame,
            Err(e) => {
                log::warn!("skipping {}: {e}", src.display());
                continue;
            }
        };

        let filtered = engine.apply_filter(&frame);
        F::write_image_png_rgba8(&dst, &filtered)?;

        fps_counter.update();
        log::info!(
            "{} -> {} ({} marks, {:.1} fps)",
            src.display(),
            dst.display(),
            engine.stats().last_marks,
            fps_counter.fps()
        );
    }

    let stats = engine.stats();
    println!(
        "Processed {} frames in {:.2?}: {} filtered, {} passed through, {} failed",
        stats.frames_seen,
        fps_counter.elapsed(),
        stats.frames_filtered,
        stats.frames_passthrough,
        stats.frames_failed
    );

    Ok(())
}

/// Pair every input image with the path its filtered version is written to.
fn collect_jobs(input: &Path, output: &Path) -> std::io::Result<Vec<(PathBuf, PathBuf)>> {
    if !input.is_dir() {
        return Ok(vec![(input.to_path_buf(), output.to_path_buf())]);
    }

    std::fs::create_dir_all(output)?;

    let mut jobs = Vec::new();
    for entry in std::fs::read_dir(input)? {
        let path = entry?.path();
        let is_image = path.extension().is_some_and(|ext| {
            ["png", "jpg", "jpeg"]
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        });
        if !is_image {
            continue;
        }
        if let Some(stem) = path.file_stem() {
            let dst = output.join(stem).with_extension("png");
            jobs.push((path, dst));
        }
    }
    jobs.sort();

    Ok(jobs)
}
