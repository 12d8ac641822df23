use num2words_uz::*;

fn latin() -> UzbekFormatter {
    UzbekFormatter::latin()
}

fn cyrillic() -> UzbekFormatter {
    UzbekFormatter::cyrillic()
}

// --- Latin ---

#[test]
fn cardinal_latin() {
    let uz = latin();
    assert_eq!(uz.to_cardinal(0).unwrap(), "nol");
    assert_eq!(uz.to_cardinal(1).unwrap(), "bir");
    assert_eq!(uz.to_cardinal(12).unwrap(), "o'n ikki");
    assert_eq!(uz.to_cardinal(23).unwrap(), "yigirma uch");
    assert_eq!(uz.to_cardinal(105).unwrap(), "yuz besh");
    assert_eq!(uz.to_cardinal(1000).unwrap(), "ming");
    assert_eq!(uz.to_cardinal(1_000_000).unwrap(), "million");
}

#[test]
fn cardinal_latin_compounds() {
    let uz = latin();
    assert_eq!(uz.to_cardinal(158).unwrap(), "yuz ellik sakkiz");
    assert_eq!(uz.to_cardinal(2023).unwrap(), "ikki ming yigirma uch");
    assert_eq!(uz.to_cardinal(65_536).unwrap(), "oltmish besh ming besh yuz o'ttiz olti");
    assert_eq!(
        uz.to_cardinal(7_000_000_012).unwrap(),
        "yetti milliard o'n ikki"
    );
}

#[test]
fn one_before_scale_word() {
    let uz = latin();
    assert_eq!(uz.to_cardinal(1001).unwrap(), "bir ming bir");
    assert_eq!(uz.to_cardinal(1_000_100).unwrap(), "bir million yuz");
    assert_eq!(uz.to_cardinal(110_000).unwrap(), "yuz o'n ming");
    assert_eq!(cyrillic().to_cardinal(1001).unwrap(), "бир минг бир");
}

#[test]
fn every_scale_word_latin() {
    let uz = latin();
    let expected = [
        (3, "ming"),
        (6, "million"),
        (9, "milliard"),
        (12, "trillion"),
        (15, "kvadrillion"),
        (18, "kvintillion"),
        (21, "sextillion"),
        (24, "septillion"),
        (27, "oktillion"),
        (30, "nonillion"),
        (33, "decillion"),
    ];
    for (exp, word) in expected {
        assert_eq!(uz.to_cardinal(10i128.pow(exp)).unwrap(), word, "10^{exp}");
        assert_eq!(
            uz.to_cardinal(3 * 10i128.pow(exp)).unwrap(),
            format!("uch {word}"),
            "3 * 10^{exp}"
        );
    }
}

// --- Cyrillic ---

#[test]
fn cardinal_cyrillic() {
    let uz = cyrillic();
    assert_eq!(uz.to_cardinal(0).unwrap(), "нол");
    assert_eq!(uz.to_cardinal(1).unwrap(), "бир");
    assert_eq!(uz.to_cardinal(12).unwrap(), "ўн икки");
    assert_eq!(uz.to_cardinal(23).unwrap(), "йигирма уч");
    assert_eq!(uz.to_cardinal(105).unwrap(), "йуз беш");
    assert_eq!(uz.to_cardinal(1000).unwrap(), "минг");
    assert_eq!(uz.to_cardinal(1_000_000).unwrap(), "миллион");
}

#[test]
fn every_scale_word_cyrillic() {
    let uz = cyrillic();
    let expected = [
        (3, "минг"),
        (6, "миллион"),
        (9, "миллиард"),
        (12, "триллион"),
        (15, "квадриллион"),
        (18, "квинтиллион"),
        (21, "секстиллион"),
        (24, "септиллион"),
        (27, "октиллион"),
        (30, "нониллион"),
        (33, "дециллион"),
    ];
    for (exp, word) in expected {
        assert_eq!(uz.to_cardinal(10i128.pow(exp)).unwrap(), word, "10^{exp}");
    }
}

// --- Negatives and range ---

#[test]
fn negative_numbers() {
    assert_eq!(latin().to_cardinal(-23).unwrap(), "minus yigirma uch");
    assert_eq!(cyrillic().to_cardinal(-23).unwrap(), "минус йигирма уч");
}

#[test]
fn out_of_range() {
    let err = latin().to_cardinal(10i128.pow(34)).unwrap_err();
    assert!(matches!(err, Num2WordsError::OutOfRange { .. }));
    assert_eq!(
        err.to_string(),
        "number out of range: 10000000000000000000000000000000000 (magnitude must be below 10^34)"
    );
    assert!(latin().to_cardinal(i128::MAX).is_err());
    assert!(latin().to_cardinal(i128::MIN).is_err());
}

#[test]
fn cardinal_converter_trait_object() {
    let uz = latin();
    let converter: &dyn CardinalConverter = &uz;
    assert_eq!(converter.to_cardinal(40).unwrap(), "qirq");
}

#[test]
fn snapshot_large_number() {
    let uz = latin();
    insta::assert_snapshot!(
        uz.to_cardinal(1_234_567_890).unwrap(),
        @"bir milliard ikki yuz o'ttiz to'rt million besh yuz oltmish yetti ming sakkiz yuz to'qson"
    );
}
