use crate::core::WordEntry;

/// The canonical practice vocabulary, in curriculum order. The store and the
/// queue are both derived from the English identifiers; changing this list
/// leaves stale saved records in place but they are never surfaced.
pub const WORD_LIST: &[WordEntry] = &[
    WordEntry { english: "hi", korean: "안녕" },
    WordEntry { english: "meet", korean: "고기" },
    WordEntry { english: "glad", korean: "기쁘다" },
    WordEntry { english: "me", korean: "나" },
    WordEntry { english: "name", korean: "이름" },
    WordEntry { english: "equal", korean: "같다" },
    WordEntry { english: "eat", korean: "먹다" },
    WordEntry { english: "do effort", korean: "노력하다" },
    WordEntry { english: "age", korean: "나이" },
    WordEntry { english: "again", korean: "다시" },
    WordEntry { english: "how many", korean: "얼마나" },
    WordEntry { english: "day", korean: "날" },
    WordEntry { english: "when", korean: "언제" },
    WordEntry { english: "subway", korean: "지하철" },
    WordEntry { english: "family", korean: "가족" },
    WordEntry { english: "please", korean: "부탁하다" },
    WordEntry { english: "sister", korean: "언니/누나" },
    WordEntry { english: "study", korean: "공부하다" },
    WordEntry { english: "human", korean: "사람" },
    WordEntry { english: "now", korean: "지금" },
    WordEntry { english: "end", korean: "끝" },
    WordEntry { english: "you", korean: "당신" },
    WordEntry { english: "worried", korean: "걱정하다" },
    WordEntry { english: "marry", korean: "결혼하다" },
    WordEntry { english: "no", korean: "아니요" },
    WordEntry { english: "sweat", korean: "땀" },
    WordEntry { english: "yet", korean: "아직" },
    WordEntry { english: "born", korean: "태어나다" },
    WordEntry { english: "Seoul", korean: "서울" },
    WordEntry { english: "dinner", korean: "저녁" },
    WordEntry { english: "food", korean: "음식" },
];

/// English identifiers in curriculum order, owned, ready for queue building.
pub fn english_words() -> Vec<String> {
    WORD_LIST.iter().map(|entry| entry.english.to_string()).collect()
}

pub fn find_entry(english: &str) -> Option<&'static WordEntry> {
    WORD_LIST.iter().find(|entry| entry.english == english)
}

pub fn word_count() -> usize {
    WORD_LIST.len()
}
