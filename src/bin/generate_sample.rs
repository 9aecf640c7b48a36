use anyhow::{Context, Result};

use larp_claims::data::vocabulary::{
    ANTHROPOMORPHISM, CHARACTER_CLASSES, CHARACTER_GENDERS, CHARACTER_RACES, PLAY_PREFERENCES,
    PLOT_TYPES, TRIGGERS,
};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    fn pick<'a>(&mut self, values: &[&'a str]) -> &'a str {
        values[self.below(values.len())]
    }

    /// Up to `max` distinct answers joined the way the exporter joins them.
    fn pick_many(&mut self, values: &[&str], max: usize) -> String {
        let count = 1 + self.below(max);
        let mut chosen: Vec<&str> = Vec::with_capacity(count);
        while chosen.len() < count.min(values.len()) {
            let v = self.pick(values);
            if !chosen.contains(&v) {
                chosen.push(v);
            }
        }
        chosen.join(", ")
    }

    fn checkbox(&mut self) -> &'static str {
        if self.below(2) == 0 {
            "☑️"
        } else {
            "☐"
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let mut rng = SimpleRng::new(42);

    let players = ["Игорь", "Анна", "Олег", "Мария", "Дмитрий", "Ксения"];
    let statuses = ["Принята", "Обсуждается", "Отклонена"];

    let output_path = "sample_claims.csv";
    let mut writer = csv::Writer::from_path(output_path).context("creating output file")?;
    writer.write_record([
        "Имя",
        "Статус",
        "Итого взнос",
        "FullPlayer",
        "Комментарий мастера",
        "Предпочтительный пол персонажа",
        "Антропоморфность",
        "Предпочтительная раса персонажа",
        "Предпочтительный класс персонажа",
        "Я хочу играть",
        "Предпочитаемые типы завязок",
        "С чем я не хочу сталкиваться (триггеры)",
        "Я готов быть лидером",
    ])?;

    let rows = 60;
    for i in 0..rows {
        let player = rng.pick(&players);
        let contribution = (3 + rng.below(5)) * 500;
        writer.write_record([
            format!("Заявка {}", i + 1),
            rng.pick(&statuses).to_string(),
            contribution.to_string(),
            player.to_string(),
            String::new(),
            rng.pick(CHARACTER_GENDERS).to_string(),
            rng.pick(ANTHROPOMORPHISM).to_string(),
            rng.pick_many(CHARACTER_RACES, 2),
            rng.pick_many(CHARACTER_CLASSES, 3),
            rng.pick_many(PLAY_PREFERENCES, 5),
            rng.pick_many(PLOT_TYPES, 4),
            rng.pick_many(TRIGGERS, 3),
            rng.checkbox().to_string(),
        ])?;
    }
    writer.flush().context("writing sample export")?;

    log::info!("Wrote {rows} claims to {output_path}");
    println!("Wrote {rows} claims to {output_path}");
    Ok(())
}
