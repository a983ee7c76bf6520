//! Reversible share-code scheme for replayable shifts.
//! Code format: BAR-<WORD><NN>, e.g., BAR-MEAD42, BAR-TANKARD07

fn fnv1a64(bytes: &[u8]) -> u64 {
    const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0100_0000_01b3;
    let mut hash = FNV_OFFSET;
    for b in bytes {
        hash = (hash ^ u64::from(*b)).wrapping_mul(FNV_PRIME);
    }
    hash
}

fn sanitize_word(word: &str) -> String {
    word.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

// Word list for share codes
pub const WORD_LIST: [&str; 64] = [
    "MEAD", "TANKARD", "BARREL", "HONEY", "BERRY", "FIREWTR", "HERBAL", "NECTAR", "GROG",
    "NETTLE", "STEIN", "CELLAR", "HEARTH", "PATRON", "BARKEEP", "COASTER", "SHAKER", "STIRRER",
    "POURER", "GARNISH", "MINT", "LEMON", "SUGAR", "CHILI", "BITTERS", "TONIC", "CORK",
    "BUNG", "TAPROOM", "SNUG", "MUG", "FLAGON", "GOBLET", "CASK", "KEG", "BREW", "MALT",
    "HOPS", "CIDER", "PERRY", "TODDY", "POSSET", "WASSAIL", "SPIGOT", "LEDGER", "COIN",
    "COPPER", "SILVER", "GOLD", "TAB", "ROUND", "LASTCALL", "CLOSING", "OPENING", "SHIFT",
    "TIPJAR", "STOOL", "BOOTH", "LANTERN", "CANDLE", "EMBER", "ASH", "OAK", "ELM",
];

#[inline]
fn pack(word_index: u16, nn: u8) -> u16 {
    word_index & 0x01FF | ((u16::from(nn) & 0x7F) << 9)
}

#[inline]
fn unpack(packed: u16) -> (u16, u8) {
    (packed & 0x01FF, ((packed >> 9) & 0x7F) as u8)
}

fn compose_seed(word_index: u16, nn: u8) -> u64 {
    let packed = pack(word_index, nn);
    // Domain-separated FNV input
    let mut buf = [0u8; 9];
    buf[..6].copy_from_slice(b"TAVRN-");
    buf[6] = (packed & 0xFF) as u8;
    buf[7] = (packed >> 8) as u8;
    buf[8] = 0x5C;
    let h = fnv1a64(&buf);
    (h & 0xFFFF_FFFF_FFFF_0000) | u64::from(packed)
}

#[must_use]
pub fn encode_friendly(seed: u64) -> String {
    let packed = (seed & 0xFFFF) as u16;
    let (wi, mut nn) = unpack(packed);
    let word = WORD_LIST.get(wi as usize).copied().unwrap_or("MEAD");
    if nn > 99 {
        nn %= 100;
    }
    format!("BAR-{word}{nn:02}")
}

#[must_use]
pub fn decode_to_seed(code: &str) -> Option<u64> {
    let s = code.trim();
    let (prefix, rest) = s.split_once('-')?;
    if !prefix.eq_ignore_ascii_case("BAR") {
        return None;
    }
    if rest.len() < 3 {
        return None;
    }
    let (word_part, nn_part) = rest.split_at(rest.len() - 2);
    let nn: u8 = nn_part.parse().ok()?;
    let word = sanitize_word(word_part);
    let idx = WORD_LIST.iter().position(|w| sanitize_word(w) == word)?;
    let wi = u16::try_from(idx).ok()?;
    Some(compose_seed(wi, nn))
}

#[must_use]
pub fn generate_code_from_entropy(entropy: u64) -> String {
    let wi = u16::try_from(entropy % WORD_LIST.len() as u64).unwrap_or(0);
    let nn = ((entropy >> 17) % 100) as u8;
    let seed = compose_seed(wi, nn);
    encode_friendly(seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_decode_roundtrips_code() {
        let seed = 0xDEAD_BEEF_CAFE_BABE;
        let code = encode_friendly(seed);
        let new_seed = decode_to_seed(&code).unwrap();
        assert_eq!(encode_friendly(new_seed), code);
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(decode_to_seed("").is_none());
        assert!(decode_to_seed("BAR-").is_none());
        assert!(decode_to_seed("BAR-XX").is_none());
        assert!(decode_to_seed("BAR-ZZZZZ99").is_none());
        assert!(decode_to_seed("DP-MEAD42").is_none());
        assert!(decode_to_seed("mead42").is_none());
    }

    #[test]
    fn decode_is_case_insensitive() {
        let code = generate_code_from_entropy(0x1234_5678);
        let lower = code.to_ascii_lowercase();
        assert_eq!(decode_to_seed(&code), decode_to_seed(&lower));
    }

    #[test]
    fn entropy_codes_decode() {
        for entropy in [0u64, 1, 99, 0xFFFF, 0xABCD_EF01_2345_6789] {
            let code = generate_code_from_entropy(entropy);
            assert!(code.starts_with("BAR-"));
            assert!(decode_to_seed(&code).is_some(), "undecodable code {code}");
        }
    }
}
