extern crate epipolar_plotter;
extern crate color_eyre;

use std::path::{Path, PathBuf};
use argh::FromArgs;
use color_eyre::eyre::Result;

use epipolar_plotter::{load_runtime_conf, RuntimeConf};
use epipolar_plotter::io::{load_image, write_points};
use epipolar_plotter::selection::{PointSource, PointFile};
use epipolar_plotter::sfm::epipolar::epipolar_lines;
use epipolar_plotter::visualize::plot::{render_epipolar_figure, save_figure};
use epipolar_plotter::visualize::window::{ClickSelector, show_figure};

/// Select points on the first image and plot their epipolar lines on the second
#[derive(Debug, FromArgs)]
struct Args {
    /// yaml runtime configuration
    #[argh(option, short = 'c')]
    conf: Option<PathBuf>,

    /// yaml list of points to use instead of clicking
    #[argh(option, short = 'p')]
    points: Option<String>,

    /// also save the figure to this path
    #[argh(option, short = 'o')]
    output: Option<String>
}

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();
    let mut runtime_conf = match &args.conf {
        Some(path) => load_runtime_conf(path)?,
        None => RuntimeConf::default()
    };
    if args.points.is_some() {
        runtime_conf.points_path = args.points;
    }
    if args.output.is_some() {
        runtime_conf.figure_output_path = args.output;
    }

    let fundamental_matrix = runtime_conf.fundamental()?;
    let image_1 = load_image(Path::new(&runtime_conf.image_path_1))?;
    let image_2 = load_image(Path::new(&runtime_conf.image_path_2))?;

    let mut point_source: Box<dyn PointSource> = match &runtime_conf.points_path {
        Some(path) => Box::new(PointFile::new(PathBuf::from(path))),
        None => Box::new(ClickSelector::new(image_1.clone(), "Image 1"))
    };
    let points = point_source.points()?;
    log::info!("Selected points: {:?}", points.iter().map(|p| (p.x, p.y)).collect::<Vec<_>>());

    if let Some(path) = &runtime_conf.points_output_path {
        write_points(&points, Path::new(path))?;
    }

    let lines = epipolar_lines(&fundamental_matrix, &points);
    for (i, line) in lines.iter().enumerate() {
        log::debug!("Epipolar line {}: {:e} x + {:e} y + {:e} = 0", i+1, line.a, line.b, line.c);
    }

    let [width, height] = runtime_conf.figure_size;
    let figure = render_epipolar_figure(&image_1, &image_2, &points, &lines, (width, height))?;
    if let Some(path) = &runtime_conf.figure_output_path {
        save_figure(&figure, Path::new(path))?;
    }
    show_figure(&figure, "Epipolar Geometry")?;

    Ok(())
}
