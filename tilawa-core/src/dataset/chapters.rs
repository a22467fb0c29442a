//! The 114 chapter records

use super::ChapterRecord;
use crate::types::RevelationPlace::{Madinah, Makkah};

const fn chapter(
    id: u8,
    name_arabic: &'static str,
    name: &'static str,
    verses_count: u16,
    revelation_place: crate::types::RevelationPlace,
) -> ChapterRecord {
    ChapterRecord {
        id,
        name_arabic,
        name,
        verses_count,
        revelation_place,
    }
}

pub(super) const CHAPTERS: [ChapterRecord; 114] = [
    chapter(1, "الفاتحة", "Al-Fatihah (The Opening)", 7, Makkah),
    chapter(2, "البقرة", "Al-Baqarah (The Cow)", 286, Madinah),
    chapter(3, "آل عمران", "Ali Imran (Family of Imran)", 200, Madinah),
    chapter(4, "النساء", "An-Nisa (The Women)", 176, Madinah),
    chapter(5, "المائدة", "Al-Maidah (The Table Spread)", 120, Madinah),
    chapter(6, "الأنعام", "Al-Anam (The Cattle)", 165, Makkah),
    chapter(7, "الأعراف", "Al-Araf (The Heights)", 206, Makkah),
    chapter(8, "الأنفال", "Al-Anfal (The Spoils of War)", 75, Madinah),
    chapter(9, "التوبة", "At-Tawbah (The Repentance)", 129, Madinah),
    chapter(10, "يونس", "Yunus (Jonah)", 109, Makkah),
    chapter(11, "هود", "Hud", 123, Makkah),
    chapter(12, "يوسف", "Yusuf (Joseph)", 111, Makkah),
    chapter(13, "الرعد", "Ar-Rad (The Thunder)", 43, Madinah),
    chapter(14, "إبراهيم", "Ibrahim (Abraham)", 52, Makkah),
    chapter(15, "الحجر", "Al-Hijr (The Rocky Tract)", 99, Makkah),
    chapter(16, "النحل", "An-Nahl (The Bee)", 128, Makkah),
    chapter(17, "الإسراء", "Al-Isra (The Night Journey)", 111, Makkah),
    chapter(18, "الكهف", "Al-Kahf (The Cave)", 110, Makkah),
    chapter(19, "مريم", "Maryam (Mary)", 98, Makkah),
    chapter(20, "طه", "Ta-Ha", 135, Makkah),
    chapter(21, "الأنبياء", "Al-Anbiya (The Prophets)", 112, Makkah),
    chapter(22, "الحج", "Al-Hajj (The Pilgrimage)", 78, Madinah),
    chapter(23, "المؤمنون", "Al-Muminun (The Believers)", 118, Makkah),
    chapter(24, "النور", "An-Nur (The Light)", 64, Madinah),
    chapter(25, "الفرقان", "Al-Furqan (The Criterion)", 77, Makkah),
    chapter(26, "الشعراء", "Ash-Shuara (The Poets)", 227, Makkah),
    chapter(27, "النمل", "An-Naml (The Ant)", 93, Makkah),
    chapter(28, "القصص", "Al-Qasas (The Stories)", 88, Makkah),
    chapter(29, "العنكبوت", "Al-Ankabut (The Spider)", 69, Makkah),
    chapter(30, "الروم", "Ar-Rum (The Romans)", 60, Makkah),
    chapter(31, "لقمان", "Luqman", 34, Makkah),
    chapter(32, "السجدة", "As-Sajdah (The Prostration)", 30, Makkah),
    chapter(33, "الأحزاب", "Al-Ahzab (The Clans)", 73, Madinah),
    chapter(34, "سبأ", "Saba (Sheba)", 54, Makkah),
    chapter(35, "فاطر", "Fatir (The Creator)", 45, Makkah),
    chapter(36, "يس", "Ya-Sin", 83, Makkah),
    chapter(37, "الصافات", "As-Saffat (Those Who Set The Ranks)", 182, Makkah),
    chapter(38, "ص", "Sad", 88, Makkah),
    chapter(39, "الزمر", "Az-Zumar (The Troops)", 75, Makkah),
    chapter(40, "غافر", "Ghafir (The Forgiver)", 85, Makkah),
    chapter(41, "فصلت", "Fussilat (Explained In Detail)", 54, Makkah),
    chapter(42, "الشورى", "Ash-Shura (The Consultation)", 53, Makkah),
    chapter(43, "الزخرف", "Az-Zukhruf (The Ornaments of Gold)", 89, Makkah),
    chapter(44, "الدخان", "Ad-Dukhan (The Smoke)", 59, Makkah),
    chapter(45, "الجاثية", "Al-Jathiyah (The Crouching)", 37, Makkah),
    chapter(46, "الأحقاف", "Al-Ahqaf (The Wind-Curved Sandhills)", 35, Makkah),
    chapter(47, "محمد", "Muhammad", 38, Madinah),
    chapter(48, "الفتح", "Al-Fath (The Victory)", 29, Madinah),
    chapter(49, "الحجرات", "Al-Hujurat (The Rooms)", 18, Madinah),
    chapter(50, "ق", "Qaf", 45, Makkah),
    chapter(51, "الذاريات", "Adh-Dhariyat (The Winnowing Winds)", 60, Makkah),
    chapter(52, "الطور", "At-Tur (The Mount)", 49, Makkah),
    chapter(53, "النجم", "An-Najm (The Star)", 62, Makkah),
    chapter(54, "القمر", "Al-Qamar (The Moon)", 55, Makkah),
    chapter(55, "الرحمن", "Ar-Rahman (The Beneficent)", 78, Madinah),
    chapter(56, "الواقعة", "Al-Waqiah (The Inevitable)", 96, Makkah),
    chapter(57, "الحديد", "Al-Hadid (The Iron)", 29, Madinah),
    chapter(58, "المجادلة", "Al-Mujadilah (The Pleading Woman)", 22, Madinah),
    chapter(59, "الحشر", "Al-Hashr (The Exile)", 24, Madinah),
    chapter(60, "الممتحنة", "Al-Mumtahanah (She That Is To Be Examined)", 13, Madinah),
    chapter(61, "الصف", "As-Saff (The Ranks)", 14, Madinah),
    chapter(62, "الجمعة", "Al-Jumuah (The Congregation, Friday)", 11, Madinah),
    chapter(63, "المنافقون", "Al-Munafiqun (The Hypocrites)", 11, Madinah),
    chapter(64, "التغابن", "At-Taghabun (The Mutual Disillusion)", 18, Madinah),
    chapter(65, "الطلاق", "At-Talaq (The Divorce)", 12, Madinah),
    chapter(66, "التحريم", "At-Tahrim (The Prohibition)", 12, Madinah),
    chapter(67, "الملك", "Al-Mulk (The Sovereignty)", 30, Makkah),
    chapter(68, "القلم", "Al-Qalam (The Pen)", 52, Makkah),
    chapter(69, "الحاقة", "Al-Haqqah (The Reality)", 52, Makkah),
    chapter(70, "المعارج", "Al-Maarij (The Ascending Stairways)", 44, Makkah),
    chapter(71, "نوح", "Nuh (Noah)", 28, Makkah),
    chapter(72, "الجن", "Al-Jinn (The Jinn)", 28, Makkah),
    chapter(73, "المزمل", "Al-Muzzammil (The Enshrouded One)", 20, Makkah),
    chapter(74, "المدثر", "Al-Muddaththir (The Cloaked One)", 56, Makkah),
    chapter(75, "القيامة", "Al-Qiyamah (The Resurrection)", 40, Makkah),
    chapter(76, "الإنسان", "Al-Insan (The Man)", 31, Madinah),
    chapter(77, "المرسلات", "Al-Mursalat (The Emissaries)", 50, Makkah),
    chapter(78, "النبأ", "An-Naba (The Tidings)", 40, Makkah),
    chapter(79, "النازعات", "An-Naziat (Those Who Drag Forth)", 46, Makkah),
    chapter(80, "عبس", "Abasa (He Frowned)", 42, Makkah),
    chapter(81, "التكوير", "At-Takwir (The Overthrowing)", 29, Makkah),
    chapter(82, "الانفطار", "Al-Infitar (The Cleaving)", 19, Makkah),
    chapter(83, "المطففين", "Al-Mutaffifin (The Defrauding)", 36, Makkah),
    chapter(84, "الانشقاق", "Al-Inshiqaq (The Splitting Open)", 25, Makkah),
    chapter(85, "البروج", "Al-Buruj (The Mansions of The Stars)", 22, Makkah),
    chapter(86, "الطارق", "At-Tariq (The Morning Star)", 17, Makkah),
    chapter(87, "الأعلى", "Al-Ala (The Most High)", 19, Makkah),
    chapter(88, "الغاشية", "Al-Ghashiyah (The Overwhelming)", 26, Makkah),
    chapter(89, "الفجر", "Al-Fajr (The Dawn)", 30, Makkah),
    chapter(90, "البلد", "Al-Balad (The City)", 20, Makkah),
    chapter(91, "الشمس", "Ash-Shams (The Sun)", 15, Makkah),
    chapter(92, "الليل", "Al-Layl (The Night)", 21, Makkah),
    chapter(93, "الضحى", "Ad-Duhaa (The Morning Hours)", 11, Makkah),
    chapter(94, "الشرح", "Ash-Sharh (The Relief)", 8, Makkah),
    chapter(95, "التين", "At-Tin (The Fig)", 8, Makkah),
    chapter(96, "العلق", "Al-Alaq (The Clot)", 19, Makkah),
    chapter(97, "القدر", "Al-Qadr (The Power, Fate)", 5, Makkah),
    chapter(98, "البينة", "Al-Bayyinah (The Evidence)", 8, Madinah),
    chapter(99, "الزلزلة", "Az-Zalzalah (The Earthquake)", 8, Madinah),
    chapter(100, "العاديات", "Al-Adiyat (The Courser)", 11, Makkah),
    chapter(101, "القارعة", "Al-Qariah (The Calamity)", 11, Makkah),
    chapter(102, "التكاثر", "At-Takathur (The Rivalry In World Increase)", 8, Makkah),
    chapter(103, "العصر", "Al-Asr (The Declining Day)", 3, Makkah),
    chapter(104, "الهمزة", "Al-Humazah (The Traducer)", 9, Makkah),
    chapter(105, "الفيل", "Al-Fil (The Elephant)", 5, Makkah),
    chapter(106, "قريش", "Quraysh", 4, Makkah),
    chapter(107, "الماعون", "Al-Maun (The Small Kindnesses)", 7, Makkah),
    chapter(108, "الكوثر", "Al-Kawthar (The Abundance)", 3, Makkah),
    chapter(109, "الكافرون", "Al-Kafirun (The Disbelievers)", 6, Makkah),
    chapter(110, "النصر", "An-Nasr (The Divine Support)", 3, Madinah),
    chapter(111, "المسد", "Al-Masad (The Palm Fibre)", 5, Makkah),
    chapter(112, "الإخلاص", "Al-Ikhlas (The Sincerity)", 4, Makkah),
    chapter(113, "الفلق", "Al-Falaq (The Daybreak)", 5, Makkah),
    chapter(114, "الناس", "An-Nas (Mankind)", 6, Makkah),
];
