//! Hand-transcribed verses for a few popular chapters

use super::CuratedVerse;

const fn curated(
    chapter: u8,
    number: u16,
    text: &'static str,
    english: &'static str,
    urdu: &'static str,
) -> CuratedVerse {
    CuratedVerse {
        chapter,
        number,
        text,
        english,
        urdu,
    }
}

pub(super) const CURATED_VERSES: &[CuratedVerse] = &[
    // Al-Fatihah (The Opening)
    curated(1, 1, "بِسْمِ ٱللَّهِ ٱلرَّحْمَٰنِ ٱلرَّحِيمِ", "In the name of Allah, the Entirely Merciful, the Especially Merciful.", "اللہ کے نام سے جو بہت مہربان، نہایت رحم والا ہے"),
    curated(1, 2, "ٱلْحَمْدُ لِلَّهِ رَبِّ ٱلْعَٰلَمِينَ", "[All] praise is [due] to Allah, Lord of the worlds.", "تمام تعریفیں اللہ کے لیے ہیں جو تمام جہانوں کا رب ہے"),
    curated(1, 3, "ٱلرَّحْمَٰنِ ٱلرَّحِيمِ", "The Entirely Merciful, the Especially Merciful.", "بہت مہربان، نہایت رحم والا"),
    curated(1, 4, "مَٰلِكِ يَوْمِ ٱلدِّينِ", "Sovereign of the Day of Recompense.", "روز جزا کا مالک"),
    curated(1, 5, "إِيَّاكَ نَعْبُدُ وَإِيَّاكَ نَسْتَعِينُ", "It is You we worship and You we ask for help.", "ہم تیری ہی عبادت کرتے ہیں اور تجھ ہی سے مدد مانگتے ہیں"),
    curated(1, 6, "ٱهْدِنَا ٱلصِّرَٰطَ ٱلْمُسْتَقِيمَ", "Guide us to the straight path.", "ہمیں سیدھا راستہ دکھا"),
    curated(1, 7, "صِرَٰطَ ٱلَّذِينَ أَنْعَمْتَ عَلَيْهِمْ غَيْرِ ٱلْمَغْضُوبِ عَلَيْهِمْ وَلَا ٱلضَّآلِّينَ", "The path of those upon whom You have bestowed favor, not of those who have evoked anger or of those who are astray.", "ان لوگوں کا راستہ جن پر تو نے انعام کیا ہے، ان کا نہیں جن پر غضب ہوا اور نہ گمراہوں کا"),
    // Ya-Sin
    curated(36, 1, "يس", "Ya, Sin.", "یٰس"),
    curated(36, 2, "وَٱلْقُرْءَانِ ٱلْحَكِيمِ", "By the wise Qur'an.", "حکمت والے قرآن کی قسم"),
    // Al-Mulk (The Sovereignty)
    curated(67, 1, "تَبَارَكَ ٱلَّذِى بِيَدِهِ ٱلْمُلْكُ وَهُوَ عَلَىٰ كُلِّ شَىْءٍ قَدِيرٌ", "Blessed is He in whose hand is dominion, and He is over all things competent.", "بابرکت ہے وہ جس کے ہاتھ میں بادشاہی ہے اور وہ ہر چیز پر قادر ہے"),
    // Al-Ikhlas (The Sincerity)
    curated(112, 1, "قُلْ هُوَ ٱللَّهُ أَحَدٌ", "Say, \"He is Allah, [who is] One.", "کہو: وہ اللہ یکتا ہے"),
    curated(112, 2, "ٱللَّهُ ٱلصَّمَدُ", "Allah, the Eternal Refuge.", "اللہ بے نیاز ہے"),
    curated(112, 3, "لَمْ يَلِدْ وَلَمْ يُولَدْ", "He neither begets nor is born.", "نہ وہ کسی کا باپ ہے اور نہ کسی کا بیٹا"),
    curated(112, 4, "وَلَمْ يَكُن لَّهُۥ كُفُوًا أَحَدٌۢ", "Nor is there to Him any equivalent.", "اور کوئی اس کا ہمسر نہیں"),
    // Al-Falaq (The Daybreak)
    curated(113, 1, "قُلْ أَعُوذُ بِرَبِّ ٱلْفَلَقِ", "Say, \"I seek refuge in the Lord of daybreak.", "کہو کہ میں صبح کے رب کی پناہ مانگتا ہوں"),
    curated(113, 2, "مِن شَرِّ مَا خَلَقَ", "From the evil of that which He created.", "جو کچھ اس نے پیدا کیا ہے اس کے شر سے"),
    // An-Nas (Mankind)
    curated(114, 1, "قُلْ أَعُوذُ بِرَبِّ ٱلنَّاسِ", "Say, \"I seek refuge in the Lord of mankind.", "کہو کہ میں لوگوں کے رب کی پناہ مانگتا ہوں"),
    curated(114, 2, "مَلِكِ ٱلنَّاسِ", "The Sovereign of mankind.", "لوگوں کے بادشاہ کی"),
];
