//! Stories and gallery records as they travel over the data API.

use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::language::Language;
use crate::types::{RecordId, Timestamp};

/// A pre-written short text attributed to the companion.
///
/// Immutable once created. The wire format keeps the site's camelCase field
/// names (`createdAt`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub id: RecordId,
    pub text: String,
    pub language: Language,
    pub created_at: Timestamp,
}

/// A saved, CDN-hosted image. Gallery images and photos share this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRecord {
    pub id: RecordId,
    pub url: String,
    pub created_at: Timestamp,
}

/// An entry of the user-visible gallery.
pub type GalleryImage = ImageRecord;

/// An entry of the photo wall.
pub type Photo = ImageRecord;

/// Italian fallback stories, served when the data store cannot be reached.
const FALLBACK_IT: [&str; 20] = [
    "Oggi ho fatto una lunga passeggiata nel parco e ho incontrato tanti amici! È stata una giornata meravigliosa.",
    "Ho cucinato la mia pasta alla carbonara preferita e ho guardato un bellissimo film italiano.",
    "Ho chiamato la mia famiglia e abbiamo parlato per ore. Mi mancano così tanto!",
    "Ho letto un libro interessante e ho bevuto un caffè in piazza. La vita è bella!",
    "Oggi ho fatto shopping e ho comprato un vestito nuovo. Sono così felice!",
    "Ho suonato il pianoforte per ore. La musica mi fa sentire viva!",
    "Ho fatto yoga al mattino e poi ho preparato una torta per i miei amici.",
    "Ho visitato un museo e ho scoperto opere d'arte incredibili. L'arte mi ispira sempre!",
    "Ho scritto nel mio diario e ho riflettuto sulla vita. È importante prendersi del tempo per sé.",
    "Ho fatto volontariato alla mensa dei poveri. Aiutare gli altri mi riempie il cuore di gioia.",
    "Ho imparato a suonare una nuova canzone alla chitarra. La musica è la mia passione!",
    "Ho fatto una gita in campagna e ho raccolto fiori selvatici. La natura è così bella!",
    "Ho organizzato una cena con i miei amici più cari. L'amicizia è un tesoro prezioso!",
    "Ho dipinto un quadro e ho espresso le mie emozioni attraverso l'arte.",
    "Ho fatto una corsa al mattino e mi sono sentita piena di energia per tutto il giorno.",
    "Ho studiato una nuova lingua. Imparare cose nuove mi entusiasma sempre!",
    "Ho fatto meditazione e ho trovato la pace interiore. La mindfulness è importante.",
    "Ho preparato una sorpresa per il compleanno di mia sorella. Amo fare felici le persone!",
    "Ho ballato nella mia stanza ascoltando la mia musica preferita. La danza mi libera!",
    "Ho scritto una poesia ispirata dalla bellezza del tramonto. La creatività scorre libera!",
];

const FALLBACK_EN: [&str; 20] = [
    "Today I took a long walk in the park and met so many friends! It was a wonderful day.",
    "I cooked my favourite carbonara and watched a beautiful Italian film.",
    "I called my family and we talked for hours. I miss them so much!",
    "I read an interesting book and had a coffee in the square. Life is beautiful!",
    "Today I went shopping and bought a new dress. I'm so happy!",
    "I played the piano for hours. Music makes me feel alive!",
    "I did yoga in the morning and then baked a cake for my friends.",
    "I visited a museum and discovered incredible works of art. Art always inspires me!",
    "I wrote in my diary and reflected on life. It's important to take time for yourself.",
    "I volunteered at the soup kitchen. Helping others fills my heart with joy.",
    "I learned to play a new song on the guitar. Music is my passion!",
    "I took a trip to the countryside and picked wildflowers. Nature is so beautiful!",
    "I organised a dinner with my dearest friends. Friendship is a precious treasure!",
    "I painted a picture and expressed my emotions through art.",
    "I went for a morning run and felt full of energy all day.",
    "I studied a new language. Learning new things always excites me!",
    "I meditated and found inner peace. Mindfulness is important.",
    "I prepared a surprise for my sister's birthday. I love making people happy!",
    "I danced in my room listening to my favourite music. Dancing sets me free!",
    "I wrote a poem inspired by the beauty of the sunset. Creativity flows freely!",
];

/// The fixed list served in place of the database when it is unreachable.
///
/// Ids are stable (`fallback-it-1` .. `fallback-en-20`) so a presentation
/// deck built from the fallback behaves like one built from real data.
pub fn fallback_stories() -> Vec<Story> {
    let tagged = FALLBACK_IT
        .iter()
        .enumerate()
        .map(|(i, text)| (Language::It, i, text))
        .chain(
            FALLBACK_EN
                .iter()
                .enumerate()
                .map(|(i, text)| (Language::En, i, text)),
        );

    tagged
        .map(|(language, i, text)| Story {
            id: format!("fallback-{language}-{}", i + 1),
            text: (*text).to_string(),
            language,
            created_at: DateTime::UNIX_EPOCH,
        })
        .collect()
}
