use proptest::prelude::*;

use qrlabel::{builder::Module, generate, generate_svg, QRBuilder, Version, QR};

fn build(data: &[u8]) -> QR {
    QRBuilder::new(data).build().unwrap()
}

// Every cell that doesn't carry payload bits
fn non_data_cells(qr: &QR) -> Vec<(i16, i16, Module)> {
    let w = qr.width() as i16;
    (0..w)
        .flat_map(|r| (0..w).map(move |c| (r, c)))
        .map(|(r, c)| (r, c, qr.get(r, c)))
        .filter(|(_, _, m)| !matches!(m, Module::Data(_)))
        .collect()
}

mod qr_proptests {
    use super::*;

    proptest! {
        #[test]
        fn proptest_deterministic(data in "[ -~]{1,271}", module_sz in 1u32..8) {
            let first = generate_svg(&data, module_sz).unwrap();
            let second = generate_svg(&data, module_sz).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn proptest_monotonic_sizing(a in 1usize..=271, b in 1usize..=271) {
            let (short, long) = if a <= b { (a, b) } else { (b, a) };
            let short_qr = build(&vec![b'x'; short]);
            let long_qr = build(&vec![b'x'; long]);
            prop_assert!(short_qr.width() <= long_qr.width());
        }

        #[test]
        fn proptest_structure_independent_of_payload(data in prop::collection::vec(any::<u8>(), 1..=271)) {
            let qr = build(&data);
            let reference = QRBuilder::new(b"-").version(qr.version()).build().unwrap();
            prop_assert_eq!(non_data_cells(&qr), non_data_cells(&reference));
        }

        #[test]
        fn proptest_svg_dimensions(data in "[A-Z0-9]{1,271}", module_sz in 1u32..8) {
            let qr = generate(&data).unwrap();
            let svg = qr.to_svg(module_sz);
            let total_sz = (qr.width() as u32 + 4) * module_sz;
            let header = format!(r#"width="{total_sz}" height="{total_sz}""#);
            prop_assert!(svg.contains(&header));
            prop_assert_eq!(svg.matches("<rect").count(), qr.count_dark_modules() + 1);
        }
    }
}

mod qr_tests {
    use test_case::test_case;

    use super::*;
    use qrlabel::{Color, QRError, DEFAULT_MODULE_SIZE};

    const ABC_PREVIEW: &str = "\
     █████████████████████████\n\
     █████████████████████████\n\
     ██       ██ █  █       ██\n\
     ██ █████ ██   ██ █████ ██\n\
     ██ █   █ █  █  █ █   █ ██\n\
     ██ █   █ ██ █ ██ █   █ ██\n\
     ██ █   █ ███ █ █ █   █ ██\n\
     ██ █████ █████ █ █████ ██\n\
     ██       █ █ █ █       ██\n\
     ██████████  █  ██████████\n\
     ██   █        █  ███ ████\n\
     ████    █ █ ████ ██ █ ███\n\
     ██   ██  █   █ ███ ██  ██\n\
     ██ █ ███████ ███ ████████\n\
     ███   ██ ███ █ █ █ █ █ ██\n\
     ██████████  █ █ █ █ █ ███\n\
     ██       █ █  █   █ █  ██\n\
     ██ █████ █ █    █   ██ ██\n\
     ██ █   █ █  █ █   ██ █ ██\n\
     ██ █   █ ███████ ███  ███\n\
     ██ █   █ █ ███ ███ ███ ██\n\
     ██ █████ █ █ ███ ███  ███\n\
     ██       █   █ █ █ █   ██\n\
     █████████████████████████\n\
     █████████████████████████\n";

    #[test]
    fn test_abc_golden() {
        let qr = build(b"ABC");
        assert_eq!(*qr.version(), 1);
        assert_eq!(qr.width(), 21);
        assert_eq!(qr.count_dark_modules(), 224);
        assert_eq!(qr.to_str(1), ABC_PREVIEW);
    }

    #[test]
    fn test_barcode_svg_size() {
        let svg = generate_svg("TJM12345", 3).unwrap();
        assert!(svg.starts_with(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="75" height="75" viewBox="0 0 75 75">"#
        ));
    }

    #[test]
    fn test_one_past_v1_capacity() {
        let qr = build(&[b'7'; 18]);
        assert_eq!(*qr.version(), 2);
        assert_eq!(qr.width(), 25);
        // Alignment pattern centred at (18, 18)
        assert_eq!(qr.get(18, 18), Module::Func(Color::Dark));
        assert_eq!(qr.get(17, 18), Module::Func(Color::Light));
        assert_eq!(qr.get(16, 16), Module::Func(Color::Dark));
    }

    #[test]
    fn test_equal_length_payloads_differ_only_in_data() {
        let a = build(b"TJM12345");
        let b = build(b"TJM54321");
        assert_eq!(non_data_cells(&a), non_data_cells(&b));
        assert_ne!(a.to_svg(DEFAULT_MODULE_SIZE), b.to_svg(DEFAULT_MODULE_SIZE));
    }

    #[test_case(1, 21)]
    #[test_case(2, 25)]
    #[test_case(6, 41)]
    #[test_case(7, 45)]
    #[test_case(10, 57)]
    fn test_forced_version_width(ver: u8, width: usize) {
        let qr = QRBuilder::new(b"TJM12345").version(Version::new(ver).unwrap()).build().unwrap();
        assert_eq!(qr.width(), width);
        let svg = qr.to_svg(1);
        let total_sz = width + 4;
        assert!(svg.contains(&format!(r#"viewBox="0 0 {total_sz} {total_sz}""#)));
    }

    #[test_case("", QRError::EmptyData)]
    #[test_case("Harga 10€", QRError::InvalidChar)]
    #[test_case(&"9".repeat(272), QRError::DataTooLong)]
    fn test_generate_errors(text: &str, err: QRError) {
        assert_eq!(generate_svg(text, DEFAULT_MODULE_SIZE), Err(err));
    }

    #[test]
    fn test_invalid_version() {
        assert_eq!(Version::new(0).map(|v| *v), Err(QRError::InvalidVersion));
        assert_eq!(Version::new(11).map(|v| *v), Err(QRError::InvalidVersion));
    }

    #[test_case(1)]
    #[test_case(2)]
    #[test_case(3)]
    #[test_case(4)]
    #[test_case(5)]
    #[test_case(6)]
    #[test_case(7)]
    #[test_case(8)]
    #[test_case(9)]
    #[test_case(10)]
    fn test_decode_full_capacity(ver: u8) {
        let version = Version::new(ver).unwrap();
        let data: String = "TJM-0123456789".chars().cycle().take(version.capacity()).collect();
        let qr = QRBuilder::new(data.as_bytes()).version(version).build().unwrap();

        let mut img = rqrr::PreparedImage::prepare(qr.to_image(4));
        let grids = img.detect_grids();
        assert_eq!(grids.len(), 1);
        let (meta, content) = grids[0].decode().unwrap();
        assert_eq!(meta.version.0, ver as usize);
        // Level L is 01 in the format bits
        assert_eq!(meta.ecc_level, 1);
        assert_eq!(meta.mask, 0);
        assert_eq!(content, data);
    }
}
