//! Prompt sampling: fixed vocabularies and per-category sample sets

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

/// Sample counts per category
pub const ADLIB_SAMPLES: usize = 32;
pub const VERSE_SAMPLES: usize = 128;

/// Items drawn per sample, without replacement
pub const SAMPLE_SIZE: usize = 3;

/// Category names, in launch order
pub const CATEGORY_ADLIBS: &str = "adlibs-and-isms";
pub const CATEGORY_CUSTOM: &str = "custom_lines";
pub const CATEGORY_VERSES: &str = "random_verses";

pub const ISMS: [&str; 18] = [
    "the 6ix"
  , "Young Money"
  , "OVO"
  , "Woes"
  , "Carbone"
  , "Swiss Soto and Josso's"
  , "Fashion week"
  , "I'm here for a good time not a long time"
  , "Day ones"
  , "Twitter fingers"
  , "Started from the bottom"
  , "Yolo"
  , "Yuh"
  , "Okay okay"
  , "More life"
  , "ting"
  , "white wine"
  , "rose"
];

pub const PHRASES: [&str; 32] = [
    "They out here makin' threats"
  , "Lovin' my drive"
  , "I bet them shits woulda popped if I was willin to help"
  , "I put some ice on her hand"
  , "When I shoot my shot it's the Kawhi way, it's goin' in"
  , "Got 'em all tannin' by the pool and they greased up"
  , "Got a lot of blood and it's cold"
  , "Can't go fifty-fifty with nobody"
  , "Word to Flacko Jodye, he done seen us put it down"
  , "I been movin' calm, don't start no trouble with me"
  , "I don't wanna die for them to miss me"
  , "They gon' tell the story, shit was different with me"
  , "Leaving me (leavin' me)"
  , "Dippin' out on me (on me)"
  , "Already got what you needed, I guess"
  , "That's why I need a one dance"
  , "Got a Hennessy in my hand"
  , "One more time 'fore I go"
  , "Ayy, truck to the plane to the truck"
  , "Truck to the hotel lobby"
  , "Me, I go through underground garages"
  , "Tryna stay light on my toes"
  , "Just ran a light in a Rolls"
  , "Told me I'm lookin' exhausted"
  , "I've been down so long, it look like up to me, They look up to me"
  , "I got fake people showin' fake love to me"
  , "Don't you wanna dance with me? No?, I could dance like Michael Jackson, I could give you thug passion"
  , "Seein' you got ritualistic, Cleansin' my soul of addiction for now, 'Cause I'm fallin' apart, yeah"
  , "Look, I just flipped a switch (Flipped, flipped), I don't know nobody else that's doin' this"
  , "Bodies start to drop, ayy (Hit the floor)"
  , "Your heart is hard to carry after dark"
  , "You're to blame for what we could have been, 'Cause look at what we are"
];

pub const CUSTOM_LINE: &str
  = "Life of a made man, drip shit on, another hit";

/// One category's ordered prompt strings
#[derive(Debug, Clone)]
pub struct PromptSet
{   pub category: &'static str
  , pub prompts: Vec<String>
}

/// Draw `k` distinct items from a vocabulary
pub fn sample_entry<R: Rng>(
  rng: &mut R
, vocab: &[&str]
, k: usize
) -> Vec<String>
{   vocab
      .choose_multiple(rng, k)
      .map(|s| s.to_string())
      .collect()
}

fn sample_category<R: Rng>(
  rng: &mut R
, vocab: &[&str]
, count: usize
) -> Vec<String>
{   (0..count)
      .map(|_| sample_entry(rng, vocab, SAMPLE_SIZE).join(", "))
      .collect()
}

/// Build the full prompt mapping for one run, categories in
/// launch order
pub fn sample_prompts<R: Rng>(rng: &mut R) -> Vec<PromptSet>
{   debug!("Sampling prompt sets");
    vec![
      PromptSet
      {   category: CATEGORY_ADLIBS
        , prompts: sample_category(rng, &ISMS, ADLIB_SAMPLES)
      }
    , PromptSet
      {   category: CATEGORY_CUSTOM
        , prompts: vec![CUSTOM_LINE.to_string()]
      }
    , PromptSet
      {   category: CATEGORY_VERSES
        , prompts: sample_category(rng, &PHRASES, VERSE_SAMPLES)
      }
    ]
}
