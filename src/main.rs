use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use miette::IntoDiagnostic;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use imgconv::ImageConverter;
use imgconv::detect::Format;
use imgconv::formats::swizzle::ChannelSwapConverter;

#[derive(Parser, Debug)]
#[command(name = "imgconv")]
#[command(version, about = "Decode an image and export it through a converter")]
struct Args {
    /// Input image (PNG, JPEG, GIF, WebP, BMP, TIFF or TGA)
    input: PathBuf,

    /// Output file; the format is taken from its extension unless --format is given
    #[arg(short, long, required_unless_present = "stdout")]
    output: Option<PathBuf>,

    /// Force a specific output format
    #[arg(short, long)]
    format: Option<FormatArg>,

    /// Write the encoded bytes to stdout instead of a file
    #[arg(long, conflicts_with = "output", requires = "format")]
    stdout: bool,

    /// Reorder RGB(A) channels into BGR(A) before exporting (raw output only)
    #[arg(long)]
    bgr: bool,

    /// Log every conversion step
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Debug)]
enum FormatArg {
    Raw,
    Png,
    Bmp,
    Tga,
    Tiff,
}

impl From<FormatArg> for Format {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Raw => Format::Raw,
            FormatArg::Png => Format::Png,
            FormatArg::Bmp => Format::Bmp,
            FormatArg::Tga => Format::Tga,
            FormatArg::Tiff => Format::Tiff,
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "imgconv=debug" } else { "imgconv=warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// BGR(A) layouts only survive the raw converter.
fn check_bgr(bgr: bool, format: Format) -> miette::Result<()> {
    if bgr && format != Format::Raw {
        return Err(miette::miette!(
            "--bgr only works with raw output, but the output format is {format}."
        ));
    }
    Ok(())
}

fn main() -> miette::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let format = match (&args.format, &args.output) {
        (Some(f), _) => f.clone().into(),
        (None, Some(path)) => Format::from_path(path).ok_or_else(|| {
            miette::miette!(
                "Could not detect output format of {}. Use --format to specify.",
                path.display()
            )
        })?,
        (None, None) => return Err(miette::miette!("No output format given. Use --format.")),
    };
    check_bgr(args.bgr, format)?;

    let input = fs::read(&args.input).into_diagnostic()?;
    let mut image = imgconv::formats::image::decode(&input).map_err(|e| miette::miette!("{e}"))?;

    if args.bgr {
        image = ChannelSwapConverter
            .export_to_image(&image.as_view())
            .map_err(|e| miette::miette!("{e}"))?;
    }

    let converter = imgconv::formats::get_converter(format).map_err(|e| miette::miette!("{e}"))?;
    tracing::info!(
        converter = converter.name(),
        size = %image.size(),
        format = %image.format(),
        "exporting"
    );

    if let Some(ref output) = args.output {
        converter
            .export_to_file(&image.as_view(), output)
            .map_err(|e| miette::miette!("{e}"))?;
    } else {
        let data = converter
            .export_to_data(&image.as_view())
            .map_err(|e| miette::miette!("{e}"))?;
        let mut stdout = io::stdout().lock();
        stdout.write_all(&data).into_diagnostic()?;
        stdout.flush().into_diagnostic()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::raw_with_bgr(true, Format::Raw, true)]
    #[case::png_without_bgr(false, Format::Png, true)]
    #[case::png_with_bgr(true, Format::Png, false)]
    #[case::tiff_with_bgr(true, Format::Tiff, false)]
    fn test_check_bgr(#[case] bgr: bool, #[case] format: Format, #[case] ok: bool) {
        assert_eq!(check_bgr(bgr, format).is_ok(), ok);
    }

    #[rstest]
    fn test_check_bgr_names_the_format() {
        let err = check_bgr(true, Format::Png).unwrap_err();
        assert!(err.to_string().contains("png"));
    }
}
