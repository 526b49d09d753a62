//! Primary-HDU image encoding.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use disk_common::{DiskResult, GridArray};
use tracing::info;

use crate::card::{Card, CARD_LEN};

/// FITS logical record size; header and data are padded to multiples of it.
pub const BLOCK_SIZE: usize = 2880;

/// Encode `image` as a complete FITS file in memory.
///
/// The grid's second axis (`j`, fastest in memory) becomes NAXIS1 and the
/// first axis (`i`) becomes NAXIS2. NaN cells are written as IEEE NaN.
/// `extra` cards are placed after the mandatory keywords.
pub fn encode_image(image: &GridArray<f64>, extra: &[Card]) -> DiskResult<Vec<u8>> {
    let (width, height) = image.shape();

    let mut cards = vec![
        Card::logical("SIMPLE", true).comment("conforms to FITS standard"),
        Card::integer("BITPIX", -64).comment("IEEE double precision"),
        Card::integer("NAXIS", 2),
        Card::integer("NAXIS1", height as i64),
        Card::integer("NAXIS2", width as i64),
        Card::logical("EXTEND", true),
    ];
    cards.extend_from_slice(extra);
    cards.push(Card::end());

    let header_len = padded_len(cards.len() * CARD_LEN);
    let data_len = padded_len(image.as_slice().len() * 8);
    let mut out = Vec::with_capacity(header_len + data_len);

    for card in &cards {
        out.extend_from_slice(&card.to_bytes()?);
    }
    out.resize(header_len, b' ');

    for value in image.as_slice() {
        out.extend_from_slice(&value.to_be_bytes());
    }
    out.resize(header_len + data_len, 0);

    Ok(out)
}

/// Encode `image` and write it to `path`, replacing any existing file.
pub fn write_image(path: impl AsRef<Path>, image: &GridArray<f64>, extra: &[Card]) -> DiskResult<()> {
    let path = path.as_ref();
    let bytes = encode_image(image, extra)?;

    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(&bytes)?;
    writer.flush()?;

    let (width, height) = image.shape();
    info!(
        path = %path.display(),
        width,
        height,
        bytes = bytes.len(),
        "wrote FITS image"
    );
    Ok(())
}

#[inline]
fn padded_len(len: usize) -> usize {
    len.div_ceil(BLOCK_SIZE) * BLOCK_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;
    use disk_common::GridSize;

    fn header_text(bytes: &[u8]) -> String {
        String::from_utf8(bytes[..BLOCK_SIZE].to_vec()).unwrap()
    }

    fn card_value(header: &str, keyword: &str) -> Option<String> {
        header
            .as_bytes()
            .chunks(CARD_LEN)
            .map(|c| std::str::from_utf8(c).unwrap())
            .find(|c| c[..8].trim_end() == keyword)
            .map(|c| c[10..30].trim().to_string())
    }

    #[test]
    fn test_padded_len() {
        assert_eq!(padded_len(0), 0);
        assert_eq!(padded_len(1), BLOCK_SIZE);
        assert_eq!(padded_len(BLOCK_SIZE), BLOCK_SIZE);
        assert_eq!(padded_len(BLOCK_SIZE + 1), 2 * BLOCK_SIZE);
    }

    #[test]
    fn test_axes_follow_memory_order() {
        let size = GridSize::new(3, 5).unwrap();
        let image = GridArray::filled(size, 1.5);
        let bytes = encode_image(&image, &[]).unwrap();
        let header = header_text(&bytes);

        assert_eq!(card_value(&header, "BITPIX").as_deref(), Some("-64"));
        assert_eq!(card_value(&header, "NAXIS1").as_deref(), Some("5"));
        assert_eq!(card_value(&header, "NAXIS2").as_deref(), Some("3"));
        assert_eq!(bytes.len() % BLOCK_SIZE, 0);
    }

    #[test]
    fn test_data_big_endian_with_nan() {
        let size = GridSize::new(1, 3).unwrap();
        let image = GridArray::from_vec(size, vec![1.0, f64::NAN, -2.5]).unwrap();
        let bytes = encode_image(&image, &[]).unwrap();

        let data = &bytes[BLOCK_SIZE..];
        let read = |k: usize| f64::from_be_bytes(data[k * 8..k * 8 + 8].try_into().unwrap());
        assert_eq!(read(0), 1.0);
        assert!(read(1).is_nan());
        assert_eq!(read(2), -2.5);
        assert!(data[24..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_extra_cards_before_end() {
        let size = GridSize::new(2, 2).unwrap();
        let image = GridArray::filled(size, 0.0);
        let extra = [Card::real("INCLIN", 60.0), Card::text("BUNIT", "arcsec")];
        let bytes = encode_image(&image, &extra).unwrap();
        let header = header_text(&bytes);

        let inclin = header.find("INCLIN").unwrap();
        let end = header.find("END     ").unwrap();
        assert!(inclin < end);
        assert!(header[end + 3..].trim().is_empty());
    }

    #[test]
    fn test_invalid_extra_card_fails() {
        let size = GridSize::new(2, 2).unwrap();
        let image = GridArray::filled(size, 0.0);
        let err = encode_image(&image, &[Card::real("RMAX", f64::INFINITY)]).unwrap_err();
        assert_eq!(err.kind(), "Fits");
    }
}
