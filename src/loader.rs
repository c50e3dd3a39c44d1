//! Reading images from disk. The format is guessed from the file contents, so the extension doesn't matter.

use crate::error::{Error, Result};
use image::{io::Reader as ImageReader, DynamicImage, GenericImageView};
use log::debug;
use std::path::Path;

/// Open and decode the image at `path`.
pub fn open<P>(path: P) -> Result<DynamicImage>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let reader = ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .map_err(|err| Error::io(path, err))?;

    debug!("decoding {} as {:?}", path.display(), reader.format());

    let image = reader.decode().map_err(|err| Error::decode(path, err))?;
    let (width, height) = image.dimensions();
    debug!("decoded {}x{} image", width, height);

    Ok(image)
}
