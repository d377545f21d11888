use super::{get_product_id, EdidError, ProductId, EDID_HEADER, EDID_LENGTH};

/// A validated base EDID block
///
/// Unlike [`get_product_id`], which projects the identification out of any
/// buffer, this checks the header and checksum before giving access to the
/// fields of the block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdidBlock<'a> {
    raw: &'a [u8; EDID_LENGTH],
}

macro_rules! edid_u8 {
    ($offset:literal $name:ident $doc:literal) => {
        #[doc = $doc]
        pub fn $name(&self) -> u8 {
            self.raw[$offset]
        }
    };
}

impl<'a> EdidBlock<'a> {
    /// Validate the first block of `edid`
    ///
    /// Bytes past the first block (extension blocks) are ignored.
    pub fn new(edid: &'a [u8]) -> Result<EdidBlock<'a>, EdidError> {
        let raw: &[u8; EDID_LENGTH] = edid
            .get(..EDID_LENGTH)
            .and_then(|block| block.try_into().ok())
            .ok_or(EdidError::TooShort(edid.len()))?;

        if raw[..8] != EDID_HEADER {
            return Err(EdidError::BadHeader);
        }
        let sum = raw.iter().fold(0u8, |acc, &b| acc.wrapping_add(b));
        if sum != 0 {
            return Err(EdidError::BadChecksum(sum));
        }

        Ok(EdidBlock { raw })
    }

    /// The raw bytes of the block
    pub fn as_bytes(&self) -> &'a [u8; EDID_LENGTH] {
        self.raw
    }

    /// Vendor & product identification
    pub fn product_id(&self) -> ProductId {
        get_product_id(Some(&self.raw[..]))
    }

    edid_u8!(18 version "EDID structure version");
    edid_u8!(19 revision "EDID structure revision");
    edid_u8!(20 input "Video input definition");
    edid_u8!(21 width_cm "Horizontal screen size in cm, `0` if unknown");
    edid_u8!(22 height_cm "Vertical screen size in cm, `0` if unknown");
    edid_u8!(24 features "Feature support bitmap");
    edid_u8!(126 extensions "Number of extension blocks following this one");
    edid_u8!(127 checksum "Checksum byte");

    /// Display gamma, if specified
    pub fn gamma(&self) -> Option<f32> {
        match self.raw[23] {
            0xff => None,
            g => Some((g as f32 + 100.0) / 100.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> [u8; EDID_LENGTH] {
        let mut edid = [0u8; EDID_LENGTH];
        edid[..8].copy_from_slice(&EDID_HEADER);
        edid[8..18].copy_from_slice(&[0x10, 0xac, 0x12, 0x34, 0x01, 0x00, 0x00, 0x00, 20, 30]);
        edid[18] = 1;
        edid[19] = 4;
        edid[21] = 60;
        edid[22] = 34;
        edid[23] = 120;
        edid[126] = 1;
        let sum = edid.iter().fold(0u8, |acc, &b| acc.wrapping_add(b));
        edid[127] = 0u8.wrapping_sub(sum);
        edid
    }

    #[test]
    fn valid_block() {
        let edid = sample();
        let block = EdidBlock::new(&edid).unwrap();
        assert_eq!(block.version(), 1);
        assert_eq!(block.revision(), 4);
        assert_eq!(block.width_cm(), 60);
        assert_eq!(block.height_cm(), 34);
        assert_eq!(block.extensions(), 1);
        assert_eq!(block.gamma(), Some(2.2));
        assert_eq!(block.product_id().manufacturer_id().to_string(), "DEL");
    }

    #[test]
    fn too_short() {
        let edid = sample();
        assert_eq!(EdidBlock::new(&edid[..127]), Err(EdidError::TooShort(127)));
    }

    #[test]
    fn bad_header() {
        let mut edid = sample();
        edid[0] = 0x01;
        edid[127] = edid[127].wrapping_sub(1);
        assert_eq!(EdidBlock::new(&edid), Err(EdidError::BadHeader));
    }

    #[test]
    fn bad_checksum() {
        let mut edid = sample();
        edid[127] = edid[127].wrapping_add(3);
        assert_eq!(EdidBlock::new(&edid), Err(EdidError::BadChecksum(3)));
    }

    #[test]
    fn extension_blocks_are_ignored() {
        let mut edid = sample().to_vec();
        edid.extend_from_slice(&[0x02; EDID_LENGTH]);
        assert!(EdidBlock::new(&edid).is_ok());
    }
}
