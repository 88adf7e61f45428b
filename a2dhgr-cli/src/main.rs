use a2dhgr::{
    consts::{HEIGHT, RASTER_LEN, WIDTH},
    DhgrDecodeContext,
};
use argh::FromArgs;
use image::{ImageFormat, RgbImage};
use std::str::FromStr;

/// Apple II DHGR screen dump converter.
#[derive(FromArgs)]
struct Cli {
    #[argh(subcommand)]
    command: Command,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum Command {
    Decode(Decode),
}

/// Decodes a DHGR screen dump (A2FC) into an image file.
#[derive(FromArgs)]
#[argh(subcommand, name = "decode")]
struct Decode {
    /// output format (png, jpg, bmp)
    #[argh(option)]
    format: Format,

    /// the input file, a raw 16 KiB aux+main screen dump
    #[argh(positional)]
    input: String,
    /// the output file
    #[argh(positional)]
    output: String,
}

#[derive(Debug)]
enum Format {
    Png,
    Jpg,
    Bmp,
}

impl FromStr for Format {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        #[rustfmt::skip]
        let Some(format) = s.eq_ignore_ascii_case("png").then_some(Format::Png)
               .or_else(|| s.eq_ignore_ascii_case("jpg").then_some(Format::Jpg))
               .or_else(|| s.eq_ignore_ascii_case("bmp").then_some(Format::Bmp))
        else { return Err("invalid string"); };

        Ok(format)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Cli { command } = argh::from_env();

    match command {
        Command::Decode(options) => decode(options),
    }
}

fn decode(options: Decode) -> Result<(), Box<dyn std::error::Error>> {
    let Decode {
        format,
        input,
        output,
    } = options;

    let dump = std::fs::read(&input)?;

    println!("Decoding `{input}`");

    let mut raster = Vec::with_capacity(RASTER_LEN);
    DhgrDecodeContext::decode_to_vec(&dump, &mut raster)?;

    RgbImage::from_vec(WIDTH as u32, HEIGHT as u32, raster)
        .ok_or("failed to create image")?
        .save_with_format(
            &output,
            match format {
                Format::Png => ImageFormat::Png,
                Format::Jpg => ImageFormat::Jpeg,
                Format::Bmp => ImageFormat::Bmp,
            },
        )?;

    println!("Written {WIDTH}x{HEIGHT} image to `{output}`");

    Ok(())
}
