// img2relief - generate a height-mapped OBJ mesh from an image or an
// image sequence.

use std::process::ExitCode;

use relief3d::cli::{CliArgs, USAGE};
use relief3d::io::export_obj_to_path;
use relief3d::pipeline;
use relief3d::pixels::FsDecoder;
use relief3d::sequence::FsLister;
use relief3d::ReliefResult;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = match CliArgs::parse(&args) {
        Ok(cli) => cli,
        Err(err) => {
            eprintln!("{}\n\n{}", err, USAGE);
            return ExitCode::FAILURE;
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("img2relief: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &CliArgs) -> ReliefResult<()> {
    let generation = pipeline::generate(&cli.image, &cli.config, &FsDecoder, &FsLister)?;

    for warning in &generation.warnings {
        eprintln!("warning: skipped {}: {}", warning.path.display(), warning.error);
    }

    export_obj_to_path(&cli.output, &generation.mesh, &generation.uvs)?;
    println!(
        "{}: {} vertices, {} faces, {} grid cells ({}x{}), {} animation tracks -> {}",
        cli.image.display(),
        generation.mesh.vertex_count(),
        generation.mesh.face_count(),
        generation.rows as u64 * generation.cols as u64,
        generation.rows,
        generation.cols,
        generation.curves.len(),
        cli.output.display()
    );
    Ok(())
}
