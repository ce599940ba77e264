//! Static corpora used across harnesses.
//!
//! [`SAMPLE_JSON`] is deliberately irregular: books are out of canonical
//! order in the file, `2М 20` has a gap at verse 4, and `Мт 5` starts at
//! verse 3. Tests that rely on those quirks say so.

use std::path::{Path, PathBuf};
use ukr_bible::Corpus;

/// Genesis 1:1 as stored in every fixture.
pub const GENESIS_1_1: &str = "На початку Бог створив Небо та землю.";

/// Three books, five chapters, eighteen verses.
pub const SAMPLE_JSON: &str = r#"{
  "Мт": {
    "ids": {"book_number": 40, "short_name": "Мт", "long_name": "Матвія"},
    "text": {
      "5": {
        "3": "Блаженні вбогі духом, бо їхнє Царство Небесне.",
        "4": "Блаженні засмучені, бо вони будуть утішені.",
        "5": "Блаженні лагідні, бо вони успадкують землю."
      }
    }
  },
  "1М": {
    "ids": {"book_number": 1, "short_name": "1М", "long_name": "Буття"},
    "text": {
      "1": {
        "1": "На початку Бог створив Небо та землю.",
        "2": "А земля була пуста та порожня, і темрява була над безоднею, і Дух Божий ширяв над поверхнею води.",
        "3": "І сказав Бог: Хай станеться світло! І сталося світло.",
        "4": "І побачив Бог світло, що добре воно, і Бог відділив світло від темряви.",
        "5": "І Бог назвав світло: День, а темряву назвав: Ніч. І був вечір, і був ранок, день перший."
      },
      "2": {
        "1": "І були закінчені небо й земля та все їхнє військо.",
        "2": "І закінчив Бог дня сьомого діло Своє, яке Він чинив.",
        "3": "І Бог поблагословив сьомий день, і освятив його."
      }
    }
  },
  "2М": {
    "ids": {"book_number": 2, "short_name": "2М", "long_name": "Вихід"},
    "text": {
      "1": {
        "1": "А оце ймення Ізраїлевих синів, що прийшли до Єгипту з Яковом.",
        "2": "Рувим, Симеон, Левій та Юда,",
        "3": "Іссахар, Завулон та Веніямин,"
      },
      "20": {
        "1": "І Бог промовляв усі ці слова, говорячи:",
        "2": "Я Господь, Бог твій, що вивів тебе з єгипетського краю з дому неволі.",
        "3": "Хай не буде тобі інших богів передо Мною!",
        "5": "Не вклоняйся їм і не служи їм, бо Я Господь, Бог твій."
      }
    }
  }
}"#;

/// Number of verses in [`SAMPLE_JSON`].
pub const SAMPLE_VERSE_COUNT: usize = 18;

/// Load [`SAMPLE_JSON`] into a corpus.
pub fn sample_corpus() -> Corpus {
    Corpus::from_json_str(SAMPLE_JSON).expect("SAMPLE_JSON must load")
}

/// Write `contents` to `dir/name` and return the full path.
pub fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("fixture write must succeed");
    path
}
