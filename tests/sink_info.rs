use std::sync::{Arc, Mutex};

use drm_sink_info::{
    dp::{
        as_sdp_supported,
        dpcd::{DPRX_FEATURE_ENUMERATION_LIST_CONT_1, MSTM_CAP},
        read_mst_cap, AuxError, MstMode,
    },
    edid::{get_product_id, print_product_id, render_product_id, EdidBlock},
    utils::LogPrinter,
};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn dell_edid() -> Vec<u8> {
    let mut edid = vec![0u8; 128];
    edid[..8].copy_from_slice(&[0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x00]);
    edid[8..18].copy_from_slice(&[0x10, 0xac, 0x12, 0x34, 0x01, 0x00, 0x00, 0x00, 20, 30]);
    edid[18] = 1;
    edid[19] = 4;
    let sum = edid.iter().fold(0u8, |acc, &b| acc.wrapping_add(b));
    edid[127] = 0u8.wrapping_sub(sum);
    edid
}

#[test]
fn edid_end_to_end() {
    init_logging();

    let edid = dell_edid();
    let id = get_product_id(Some(&edid[..]));
    assert_eq!(EdidBlock::new(&edid).unwrap().product_id(), id);
    assert_eq!(
        render_product_id(&id, false),
        "manufacturer name: DEL, product code: 13330, serial number: 1, week/year of manufacture: 20/2020"
    );

    // same output, routed through the log
    let mut printer = LogPrinter::new(tracing::Level::INFO).with_prefix("DP-1: ");
    print_product_id(&mut printer, &id, true);
}

#[test]
fn truncated_edid_is_silent() {
    init_logging();

    let edid = dell_edid();
    let id = get_product_id(Some(&edid[..127]));
    assert_eq!(id, Default::default());
    assert!(EdidBlock::new(&edid[..127]).is_err());
}

/// An AUX channel backed by a register table, recording every address read
fn recording_aux(
    registers: &'static [(u32, u8)],
) -> (
    impl FnMut(u32, &mut [u8]) -> Result<usize, AuxError>,
    Arc<Mutex<Vec<u32>>>,
) {
    let log = Arc::new(Mutex::new(Vec::new()));
    let reads = log.clone();
    let aux = move |offset: u32, buf: &mut [u8]| -> Result<usize, AuxError> {
        reads.lock().unwrap().push(offset);
        let value = registers
            .iter()
            .find(|(addr, _)| *addr == offset)
            .map(|(_, value)| *value)
            .ok_or(AuxError::Nack)?;
        buf[0] = value;
        Ok(1)
    };
    (aux, log)
}

#[test]
fn dp_queries_read_only_what_they_need() {
    init_logging();

    let mut dpcd = [0u8; 16];
    dpcd[0] = 0x11;
    let (mut aux, reads) = recording_aux(&[(MSTM_CAP, 0x01), (DPRX_FEATURE_ENUMERATION_LIST_CONT_1, 0x01)]);
    assert_eq!(read_mst_cap(&mut aux, &dpcd), MstMode::Sst);
    assert!(!as_sdp_supported(&mut aux, &dpcd));
    assert!(reads.lock().unwrap().is_empty());

    dpcd[0] = 0x13;
    assert_eq!(read_mst_cap(&mut aux, &dpcd), MstMode::Mst);
    assert!(as_sdp_supported(&mut aux, &dpcd));
    assert_eq!(
        *reads.lock().unwrap(),
        vec![MSTM_CAP, DPRX_FEATURE_ENUMERATION_LIST_CONT_1]
    );
}

#[test]
fn dp_queries_fail_safe() {
    init_logging();

    let mut dpcd = [0u8; 16];
    dpcd[0] = 0x14;
    let (mut aux, reads) = recording_aux(&[]);
    assert_eq!(read_mst_cap(&mut aux, &dpcd), MstMode::Sst);
    assert!(!as_sdp_supported(&mut aux, &dpcd));
    assert_eq!(reads.lock().unwrap().len(), 2);
}
