use std::collections::HashSet;

use rand::{
    rngs::StdRng,
    SeedableRng,
};

use super::SheetAssembler;
use crate::{
    core::{
        VocabularyEntry,
        Worksheet,
        WorksheetKind,
    },
    hanja::{
        CharDictionary,
        CharReading,
        CompoundTable,
    },
    layout::ROW_WIDTH,
    settings::SheetSettings,
};

fn vocabulary() -> Vec<VocabularyEntry> {
    vec![
        VocabularyEntry::new("1", "학교")
            .with_hanja("學校")
            .with_meaning("학생들이 모여서 선생님에게 배우는 곳. 초등학교, 중학교 따위.")
            .with_examples(["아침 일찍 학교에 갔다.", "우리 학교는 산 아래에 있다."])
            .with_grade(3),
        VocabularyEntry::new("2", "학생")
            .with_hanja("學生")
            .with_meaning("학교에 다니면서 공부하는 사람")
            .with_examples(["학생들이 운동장에 모였다."])
            .with_grade(3),
        VocabularyEntry::new("3", "바다")
            .with_hanja("─")
            .with_meaning("지구 위에서 짠물이 괴어 있는 넓은 곳")
            .with_grade(2),
        VocabularyEntry::new("4", "생명")
            .with_hanja("生命")
            .with_meaning("사람이 살아서 숨 쉬고 활동할 수 있게 하는 힘")
            .with_examples(["모든 생명은 소중하다."])
            .with_grade(5),
        VocabularyEntry::new("5", "교장")
            .with_hanja("校長")
            .with_meaning("학교의 으뜸 직위")
            .with_grade(5),
    ]
}

fn dictionary() -> CharDictionary {
    [
        ('學', CharReading::new("학", "배울")),
        ('校', CharReading::new("교", "학교")),
        ('生', CharReading::new("생", "날")),
        ('命', CharReading::new("명", "목숨")),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_meaning_sheet_repeats_each_grid() {
    let settings = SheetSettings::default();
    let vocab = vocabulary();
    let sheet = SheetAssembler::new(&settings).generate(WorksheetKind::Meaning, &vocab);

    let Worksheet::Meaning(sections) = sheet else {
        panic!("Expected meaning worksheet");
    };
    assert_eq!(sections.len(), vocab.len());

    let first = &sections[0];
    assert_eq!(first.header.word, "학교");
    assert_eq!(first.header.hanja, "學校");
    assert_eq!(first.passes.len(), 3);
    assert!(first.passes.iter().all(|pass| pass == &first.passes[0]));

    // Leading space plus 35 characters: two full rows and part of a third
    let grid = &first.passes[0];
    assert_eq!(grid.len(), 3);
    assert!(grid.iter().all(|row| row.len() == ROW_WIDTH));
    assert_eq!(grid[0].cells[0].main_glyph, " ");
    let traced: String = grid.iter().map(|row| row.text()).collect();
    assert_eq!(traced, format!(" {}", vocab[0].meaning));
}

#[test]
fn test_sentence_sheet_has_one_grid_per_example() {
    let settings = SheetSettings::default();
    let vocab = vocabulary();
    let sheet = SheetAssembler::new(&settings).generate(WorksheetKind::Sentence, &vocab);

    let Worksheet::Sentence(sections) = sheet else {
        panic!("Expected sentence worksheet");
    };
    let counts: Vec<usize> = sections.iter().map(|s| s.sentences.len()).collect();
    assert_eq!(counts, vec![2, 1, 0, 1, 0]);

    assert_eq!(sections[0].header.meaning, vocab[0].meaning);
    assert_eq!(sections[0].sentences[0][0].text(), " 아침 일찍 학교에 갔다.");
    assert_eq!(sections[0].sentences[1].len(), 2);
}

#[test]
fn test_hanja_sheet_pairs_cards_with_slots() {
    let settings = SheetSettings::default();
    let vocab = vocabulary();
    let dictionary = dictionary();
    let mut compounds = CompoundTable::new();
    compounds.insert('命', "命令");

    let sheet = SheetAssembler::new(&settings)
        .with_dictionary(&dictionary)
        .with_compounds(&compounds)
        .generate(WorksheetKind::Hanja, &vocab);

    let Worksheet::Hanja(cards) = sheet else {
        panic!("Expected hanja worksheet");
    };
    let characters: String = cards.iter().map(|c| c.detail.character).collect();
    assert_eq!(characters, "學校生命長");

    let unique: HashSet<char> = cards.iter().map(|c| c.detail.character).collect();
    assert_eq!(unique.len(), cards.len());

    for (i, card) in cards.iter().enumerate() {
        assert_eq!(card.detail.first_seen_index, i);
        assert_eq!(card.writer_id, format!("hanzi-writer-{}", i));
        assert_eq!(card.stroke_order_id, format!("stroke-order-{}", i));
        assert_eq!(card.practice_boxes, 10);
    }

    let life = &cards[3].detail;
    assert_eq!((life.reading.as_str(), life.gloss.as_str()), ("명", "목숨"));
    assert_eq!(life.related_words, vec!["생명 (生命)", "命令"]);

    // Not in the dictionary, but aligned with 장 in 교장
    let chief = &cards[4].detail;
    assert_eq!((chief.reading.as_str(), chief.gloss.as_str()), ("장", ""));
}

#[test]
fn test_hanja_sheet_uses_vocabulary_for_cross_reference() {
    let settings = SheetSettings::default();
    let vocab = vocabulary();
    let input = vec![VocabularyEntry::new("9", "생").with_hanja("生")];

    let Worksheet::Hanja(cards) = SheetAssembler::new(&settings)
        .with_vocabulary(&vocab)
        .generate(WorksheetKind::Hanja, &input)
    else {
        panic!("Expected hanja worksheet");
    };

    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].detail.related_words, vec!["학생 (學生)", "생명 (生命)"]);
}

#[test]
fn test_quiz_sheet_draws_distractors_from_vocabulary() {
    let settings = SheetSettings::default();
    let vocab = vocabulary();
    let assembler = SheetAssembler::new(&settings).with_vocabulary(&vocab);
    let mut rng = StdRng::seed_from_u64(42);

    let Worksheet::Quiz(quiz) =
        assembler.generate_with_rng(WorksheetKind::Quiz, &vocab[..2], &mut rng)
    else {
        panic!("Expected quiz worksheet");
    };

    assert_eq!(quiz.multiple_choice.len(), 2);
    assert_eq!(quiz.fill_in_blank.len(), 2);

    for (i, numbered) in quiz.multiple_choice.iter().enumerate() {
        assert_eq!(numbered.number, i + 1);
        assert_eq!(numbered.item.target.id, vocab[i].id);
        assert_eq!(numbered.item.options.len(), 4);
        assert!(numbered.item.answer_index().is_some());
    }

    let first_blank = &quiz.fill_in_blank[0].item;
    assert_eq!(first_blank.blanked_sentence, "아침 일찍 _____에 갔다.");
    assert_eq!(first_blank.hint, "학생들이 모여서 선...");
}

#[test]
fn test_quiz_without_vocabulary_uses_own_entries() {
    let settings = SheetSettings::default();
    let vocab = vocabulary();
    let mut rng = StdRng::seed_from_u64(9);

    let Worksheet::Quiz(quiz) =
        SheetAssembler::new(&settings).generate_with_rng(WorksheetKind::Quiz, &vocab[..3], &mut rng)
    else {
        panic!("Expected quiz worksheet");
    };

    // Only two other entries to draw from
    assert!(quiz.multiple_choice.iter().all(|n| n.item.options.len() == 3));
}

#[test]
fn test_settings_change_layout() {
    let settings = SheetSettings { row_width: 10, trace_passes: 1, ..SheetSettings::default() };
    let vocab = vocabulary();

    let Worksheet::Meaning(sections) =
        SheetAssembler::new(&settings).generate(WorksheetKind::Meaning, &vocab[2..3])
    else {
        panic!("Expected meaning worksheet");
    };

    assert_eq!(sections[0].passes.len(), 1);
    assert!(sections[0].passes[0].iter().all(|row| row.len() == 10));
}

#[test]
fn test_empty_entry_list() {
    let settings = SheetSettings::default();
    let assembler = SheetAssembler::new(&settings);

    for kind in WorksheetKind::ALL {
        let sheet = assembler.generate(kind, &[]);
        assert_eq!(sheet.kind(), kind);
        let value = serde_json::to_value(&sheet).unwrap();
        assert_eq!(value["type"], kind.as_str());
    }
}

#[test]
fn test_out_of_range_settings_keep_sheet_limits() {
    let settings =
        SheetSettings { trace_passes: 0, related_word_cap: 25, ..SheetSettings::default() };
    let vocab: Vec<VocabularyEntry> = (0..30)
        .map(|i| {
            VocabularyEntry::new(i.to_string(), format!("학{}", i))
                .with_hanja("學")
                .with_meaning(format!("뜻 {}", i))
        })
        .collect();
    let assembler = SheetAssembler::new(&settings);

    let Worksheet::Hanja(cards) = assembler.generate(WorksheetKind::Hanja, &vocab) else {
        panic!("Expected hanja worksheet");
    };
    assert_eq!(cards[0].detail.related_words.len(), 10);

    let Worksheet::Meaning(sections) = assembler.generate(WorksheetKind::Meaning, &vocab[..1])
    else {
        panic!("Expected meaning worksheet");
    };
    assert_eq!(sections[0].passes.len(), 1);

    let mut rng = StdRng::seed_from_u64(4);
    let Worksheet::Quiz(quiz) = assembler.generate_with_rng(WorksheetKind::Quiz, &vocab, &mut rng)
    else {
        panic!("Expected quiz worksheet");
    };
    assert!(quiz.multiple_choice.iter().all(|n| n.item.options.len() == 4));
}
