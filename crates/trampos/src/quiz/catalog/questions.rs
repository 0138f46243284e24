use crate::quiz::domain::{QuestionTemplate, RiasecType};

use RiasecType::{A, C, E, I, R, S};

/// Compiled-in question bank: `(id, yes type, no type, text)`.
const BANK: &[(u32, RiasecType, RiasecType, &str)] = &[
    (1, I, R, "Diante de uma rotina que pode ser otimizada, você prefere analisar antes de agir?"),
    (2, S, E, "Em um grupo em conflito, você prefere apoiar e acolher pessoas?"),
    (3, C, A, "Para um anúncio, você prefere seguir um padrão pronto?"),
    (4, A, C, "Para um layout, você prefere criar do seu jeito?"),
    (5, A, C, "Para um texto curto, você prefere criar do seu jeito?"),
    (6, R, I, "Diante de um projeto com risco, você prefere agir na prática primeiro?"),
    (7, I, R, "Diante de um procedimento que precisa melhorar, você prefere analisar antes de agir?"),
    (8, E, S, "Em uma situação emocional delicada, você prefere liderar para alcançar resultados?"),
    (9, R, I, "Diante de um bug ou falha, você prefere agir na prática primeiro?"),
    (10, E, S, "Em uma negociação tensa, você prefere liderar para alcançar resultados?"),
    (11, S, E, "Em uma decisão que afeta pessoas, você prefere apoiar e acolher pessoas?"),
    (12, S, E, "Em uma meta urgente, você prefere apoiar e acolher pessoas?"),
    (13, R, I, "Diante de uma tarefa operacional, você prefere agir na prática primeiro?"),
    (14, C, A, "Para um portfólio, você prefere seguir um padrão pronto?"),
    (15, E, S, "Em uma comunidade precisando de apoio, você prefere liderar para alcançar resultados?"),
    (16, C, A, "Para um convite, você prefere seguir um padrão pronto?"),
    (17, R, I, "Diante de uma dúvida técnica, você prefere agir na prática primeiro?"),
    (18, A, C, "Para um conteúdo para redes, você prefere criar do seu jeito?"),
    (19, S, E, "Em uma pessoa insegura, você prefere apoiar e acolher pessoas?"),
    (20, C, A, "Para um vídeo curto, você prefere seguir um padrão pronto?"),
    (21, I, R, "Diante de um trabalho com pouco tempo, você prefere analisar antes de agir?"),
    (22, R, I, "Diante de um ambiente com pressão, você prefere agir na prática primeiro?"),
    (23, I, R, "Diante de um imprevisto no dia a dia, você prefere analisar antes de agir?"),
    (24, E, S, "Em um cliente indeciso, você prefere liderar para alcançar resultados?"),
    (25, R, I, "Diante de uma falha recorrente, você prefere agir na prática primeiro?"),
    (26, R, I, "Diante de uma situação prática nova, você prefere agir na prática primeiro?"),
    (27, C, A, "Para uma solução estética, você prefere seguir um padrão pronto?"),
    (28, C, A, "Para um roteiro, você prefere seguir um padrão pronto?"),
    (29, I, R, "Diante de um sistema que não funciona, você prefere analisar antes de agir?"),
    (30, A, C, "Para uma narrativa, você prefere criar do seu jeito?"),
    (31, E, S, "Em uma reunião importante, você prefere liderar para alcançar resultados?"),
    (32, I, R, "Diante de uma demanda urgente, você prefere analisar antes de agir?"),
    (33, A, C, "Para uma identidade visual, você prefere criar do seu jeito?"),
    (34, E, S, "Em um time que precisa de direção, você prefere liderar para alcançar resultados?"),
    (35, E, S, "Em um grupo desmotivado, você prefere liderar para alcançar resultados?"),
    (36, A, C, "Para um design de produto, você prefere criar do seu jeito?"),
    (37, C, A, "Para um nome ou slogan, você prefere seguir um padrão pronto?"),
    (38, I, R, "Diante de um desafio no trabalho, você prefere analisar antes de agir?"),
    (39, S, E, "Em um novo integrante do time, você prefere apoiar e acolher pessoas?"),
    (40, A, C, "Para uma proposta visual, você prefere criar do seu jeito?"),
    (41, S, E, "Em um projeto com muita gente, você prefere apoiar e acolher pessoas?"),
    (42, E, S, "Em um objetivo agressivo, você prefere liderar para alcançar resultados?"),
    (43, R, I, "Diante de um resultado abaixo do esperado, você prefere agir na prática primeiro?"),
    (44, S, E, "Em uma turma aprendendo, você prefere apoiar e acolher pessoas?"),
    (45, A, C, "Para um cartaz, você prefere criar do seu jeito?"),
    (46, A, C, "Para uma campanha, você prefere criar do seu jeito?"),
    (47, I, R, "Diante de um obstáculo inesperado, você prefere analisar antes de agir?"),
    (48, S, E, "Em um atendimento difícil, você prefere apoiar e acolher pessoas?"),
    (49, C, A, "Para um projeto criativo, você prefere seguir um padrão pronto?"),
    (50, R, I, "Diante de um erro em um processo, você prefere agir na prática primeiro?"),
    (51, C, A, "Para um layout, você prefere seguir um padrão pronto?"),
    (52, A, C, "Para uma solução estética, você prefere criar do seu jeito?"),
    (53, S, E, "Em uma negociação tensa, você prefere apoiar e acolher pessoas?"),
    (54, A, C, "Para um anúncio, você prefere criar do seu jeito?"),
    (55, R, I, "Diante de um equipamento com defeito, você prefere agir na prática primeiro?"),
    (56, I, R, "Diante de um resultado abaixo do esperado, você prefere analisar antes de agir?"),
    (57, E, S, "Em um novo integrante do time, você prefere liderar para alcançar resultados?"),
    (58, E, S, "Em uma meta urgente, você prefere liderar para alcançar resultados?"),
    (59, I, R, "Diante de uma falha recorrente, você prefere analisar antes de agir?"),
    (60, E, S, "Em uma decisão que afeta pessoas, você prefere liderar para alcançar resultados?"),
    (61, E, S, "Em uma apresentação para público, você prefere liderar para alcançar resultados?"),
    (62, A, C, "Para um projeto criativo, você prefere criar do seu jeito?"),
    (63, S, E, "Em um ambiente competitivo, você prefere apoiar e acolher pessoas?"),
    (64, C, A, "Para uma proposta visual, você prefere seguir um padrão pronto?"),
    (65, R, I, "Diante de um alerta de qualidade, você prefere agir na prática primeiro?"),
    (66, C, A, "Para um conteúdo para redes, você prefere seguir um padrão pronto?"),
    (67, A, C, "Para um conceito, você prefere criar do seu jeito?"),
    (68, R, I, "Diante de um procedimento que precisa melhorar, você prefere agir na prática primeiro?"),
    (69, I, R, "Diante de uma quebra de padrão, você prefere analisar antes de agir?"),
    (70, I, R, "Diante de uma inconformidade, você prefere analisar antes de agir?"),
    (71, S, E, "Em uma situação emocional delicada, você prefere apoiar e acolher pessoas?"),
    (72, I, R, "Diante de uma tarefa operacional, você prefere analisar antes de agir?"),
    (73, A, C, "Para um material visual, você prefere criar do seu jeito?"),
    (74, R, I, "Diante de um fluxo que precisa correção, você prefere agir na prática primeiro?"),
    (75, S, E, "Em uma reunião importante, você prefere apoiar e acolher pessoas?"),
    (76, E, S, "Em um projeto com muita gente, você prefere liderar para alcançar resultados?"),
    (77, A, C, "Para um nome ou slogan, você prefere criar do seu jeito?"),
    (78, C, A, "Para uma narrativa, você prefere seguir um padrão pronto?"),
    (79, A, C, "Para um convite, você prefere criar do seu jeito?"),
    (80, R, I, "Diante de um sistema que não funciona, você prefere agir na prática primeiro?"),
    (81, E, S, "Em uma equipe com dificuldades, você prefere liderar para alcançar resultados?"),
    (82, E, S, "Em um grupo em conflito, você prefere liderar para alcançar resultados?"),
    (83, A, C, "Para um portfólio, você prefere criar do seu jeito?"),
    (84, C, A, "Para um cartaz, você prefere seguir um padrão pronto?"),
    (85, R, I, "Diante de um desafio no trabalho, você prefere agir na prática primeiro?"),
    (86, R, I, "Diante de uma decisão técnica, você prefere agir na prática primeiro?"),
    (87, R, I, "Diante de uma anomalia nos dados, você prefere agir na prática primeiro?"),
    (88, S, E, "Em um grupo desmotivado, você prefere apoiar e acolher pessoas?"),
    (89, E, S, "Em uma pessoa insegura, você prefere liderar para alcançar resultados?"),
    (90, S, E, "Em um colega com problema, você prefere apoiar e acolher pessoas?"),
    (91, I, R, "Diante de um equipamento que precisa ajuste, você prefere analisar antes de agir?"),
    (92, C, A, "Para uma campanha, você prefere seguir um padrão pronto?"),
    (93, R, I, "Diante de um imprevisto no dia a dia, você prefere agir na prática primeiro?"),
    (94, C, A, "Para uma apresentação, você prefere seguir um padrão pronto?"),
    (95, I, R, "Diante de um erro em um processo, você prefere analisar antes de agir?"),
    (96, I, R, "Diante de um problema técnico, você prefere analisar antes de agir?"),
    (97, S, E, "Em um time que precisa de direção, você prefere apoiar e acolher pessoas?"),
    (98, S, E, "Em um objetivo agressivo, você prefere apoiar e acolher pessoas?"),
    (99, A, C, "Para um vídeo curto, você prefere criar do seu jeito?"),
    (100, C, A, "Para um texto curto, você prefere seguir um padrão pronto?"),
    (101, C, A, "Para um conceito, você prefere seguir um padrão pronto?"),
    (102, S, E, "Em um projeto com muita gente, você prefere apoiar e acolher pessoas?"),
    (103, R, I, "Diante de uma inconformidade, você prefere agir na prática primeiro?"),
    (104, I, R, "Diante de um trabalho com pouco tempo, você prefere analisar antes de agir?"),
    (105, I, R, "Diante de uma decisão técnica, você prefere analisar antes de agir?"),
    (106, S, E, "Em uma turma aprendendo, você prefere apoiar e acolher pessoas?"),
    (107, E, S, "Em um cliente indeciso, você prefere liderar para alcançar resultados?"),
    (108, I, R, "Diante de uma anomalia nos dados, você prefere analisar antes de agir?"),
    (109, S, E, "Em uma apresentação para público, você prefere apoiar e acolher pessoas?"),
    (110, E, S, "Em uma negociação tensa, você prefere liderar para alcançar resultados?"),
    (111, C, A, "Para um convite, você prefere seguir um padrão pronto?"),
    (112, I, R, "Diante de um fluxo que precisa correção, você prefere analisar antes de agir?"),
    (113, R, I, "Diante de uma quebra de padrão, você prefere agir na prática primeiro?"),
    (114, S, E, "Em uma decisão que afeta pessoas, você prefere apoiar e acolher pessoas?"),
    (115, E, S, "Em um objetivo agressivo, você prefere liderar para alcançar resultados?"),
    (116, R, I, "Diante de um equipamento que precisa ajuste, você prefere agir na prática primeiro?"),
    (117, E, S, "Em um grupo desmotivado, você prefere liderar para alcançar resultados?"),
    (118, E, S, "Em uma situação emocional delicada, você prefere liderar para alcançar resultados?"),
    (119, S, E, "Em um atendimento difícil, você prefere apoiar e acolher pessoas?"),
    (120, A, C, "Para uma campanha, você prefere criar do seu jeito?"),
    (121, A, C, "Para uma proposta visual, você prefere criar do seu jeito?"),
    (122, E, S, "Em uma reunião importante, você prefere liderar para alcançar resultados?"),
    (123, S, E, "Em uma pessoa insegura, você prefere apoiar e acolher pessoas?"),
    (124, I, R, "Diante de um alerta de qualidade, você prefere analisar antes de agir?"),
    (125, C, A, "Para um vídeo curto, você prefere seguir um padrão pronto?"),
    (126, C, A, "Para um roteiro, você prefere seguir um padrão pronto?"),
    (127, R, I, "Diante de uma situação de manutenção, você prefere agir na prática primeiro?"),
    (128, A, C, "Para uma apresentação, você prefere criar do seu jeito?"),
    (129, A, C, "Para uma identidade visual, você prefere criar do seu jeito?"),
    (130, C, A, "Para um portfólio, você prefere seguir um padrão pronto?"),
    (131, A, C, "Para um design de produto, você prefere criar do seu jeito?"),
    (132, E, S, "Em um ambiente competitivo, você prefere liderar para alcançar resultados?"),
    (133, R, I, "Diante de um caso que exige diagnóstico, você prefere agir na prática primeiro?"),
    (134, E, S, "Em uma comunidade precisando de apoio, você prefere liderar para alcançar resultados?"),
    (135, R, I, "Diante de um projeto com risco, você prefere agir na prática primeiro?"),
    (136, S, E, "Em uma meta urgente, você prefere apoiar e acolher pessoas?"),
    (137, S, E, "Em um novo integrante do time, você prefere apoiar e acolher pessoas?"),
    (138, C, A, "Para um anúncio, você prefere seguir um padrão pronto?"),
    (139, I, R, "Diante de um erro que precisa de causa raiz, você prefere analisar antes de agir?"),
    (140, R, I, "Diante de uma situação prática nova, você prefere agir na prática primeiro?"),
    (141, C, A, "Para um nome ou slogan, você prefere seguir um padrão pronto?"),
    (142, R, I, "Diante de um ambiente com pressão, você prefere agir na prática primeiro?"),
    (143, I, R, "Diante de uma rotina que pode ser otimizada, você prefere analisar antes de agir?"),
    (144, A, C, "Para um cartaz, você prefere criar do seu jeito?"),
    (145, A, C, "Para um conteúdo para redes, você prefere criar do seu jeito?"),
    (146, I, R, "Diante de um problema com múltiplas causas, você prefere analisar antes de agir?"),
    (147, R, I, "Diante de um problema técnico, você prefere agir na prática primeiro?"),
    (148, A, C, "Para uma narrativa, você prefere criar do seu jeito?"),
    (149, C, A, "Para uma solução estética, você prefere seguir um padrão pronto?"),
    (150, A, C, "Para um layout, você prefere criar do seu jeito?"),
    (151, A, C, "Para um anúncio, você prefere criar do seu jeito?"),
    (152, R, I, "Diante de um obstáculo inesperado, você prefere agir na prática primeiro?"),
    (153, S, E, "Em um cliente indeciso, você prefere apoiar e acolher pessoas?"),
    (154, A, C, "Para um portfólio, você prefere criar do seu jeito?"),
    (155, E, S, "Em um grupo em conflito, você prefere liderar para alcançar resultados?"),
    (156, A, C, "Para um convite, você prefere criar do seu jeito?"),
    (157, R, I, "Diante de um sistema que não funciona, você prefere agir na prática primeiro?"),
    (158, E, S, "Em uma decisão que afeta pessoas, você prefere liderar para alcançar resultados?"),
    (159, S, E, "Em um time que precisa de direção, você prefere apoiar e acolher pessoas?"),
    (160, A, C, "Para um vídeo curto, você prefere criar do seu jeito?"),
    (161, A, C, "Para um conceito, você prefere criar do seu jeito?"),
    (162, I, R, "Diante de um bug ou falha, você prefere analisar antes de agir?"),
    (163, C, A, "Para uma identidade visual, você prefere seguir um padrão pronto?"),
    (164, I, R, "Diante de uma dúvida técnica, você prefere analisar antes de agir?"),
    (165, C, A, "Para um cartaz, você prefere seguir um padrão pronto?"),
    (166, I, R, "Diante de um ambiente com pressão, você prefere analisar antes de agir?"),
    (167, E, S, "Em uma equipe com dificuldades, você prefere liderar para alcançar resultados?"),
    (168, A, C, "Para um nome ou slogan, você prefere criar do seu jeito?"),
    (169, C, A, "Para um layout, você prefere seguir um padrão pronto?"),
    (170, S, E, "Em uma reunião importante, você prefere apoiar e acolher pessoas?"),
    (171, A, C, "Para um material visual, você prefere criar do seu jeito?"),
    (172, S, E, "Em uma negociação tensa, você prefere apoiar e acolher pessoas?"),
    (173, I, R, "Diante de um projeto com risco, você prefere analisar antes de agir?"),
    (174, I, R, "Diante de uma situação de manutenção, você prefere analisar antes de agir?"),
    (175, C, A, "Para um conteúdo para redes, você prefere seguir um padrão pronto?"),
    (176, R, I, "Diante de um trabalho com pouco tempo, você prefere agir na prática primeiro?"),
    (177, S, E, "Em um ambiente competitivo, você prefere apoiar e acolher pessoas?"),
    (178, C, A, "Para um texto curto, você prefere seguir um padrão pronto?"),
    (179, C, A, "Para uma apresentação, você prefere seguir um padrão pronto?"),
    (180, R, I, "Diante de uma rotina que pode ser otimizada, você prefere agir na prática primeiro?"),
    (181, R, I, "Diante de um erro que precisa de causa raiz, você prefere agir na prática primeiro?"),
    (182, C, A, "Para uma proposta visual, você prefere seguir um padrão pronto?"),
    (183, R, I, "Diante de uma demanda urgente, você prefere agir na prática primeiro?"),
    (184, E, S, "Em uma pessoa insegura, você prefere liderar para alcançar resultados?"),
    (185, I, R, "Diante de um resultado abaixo do esperado, você prefere analisar antes de agir?"),
    (186, C, A, "Para uma narrativa, você prefere seguir um padrão pronto?"),
    (187, E, S, "Em uma turma aprendendo, você prefere liderar para alcançar resultados?"),
    (188, I, R, "Diante de uma falha recorrente, você prefere analisar antes de agir?"),
    (189, E, S, "Em um novo integrante do time, você prefere liderar para alcançar resultados?"),
    (190, S, E, "Em um grupo desmotivado, você prefere apoiar e acolher pessoas?"),
    (191, E, S, "Em um projeto com muita gente, você prefere liderar para alcançar resultados?"),
    (192, I, R, "Diante de uma situação prática nova, você prefere analisar antes de agir?"),
    (193, A, C, "Para um roteiro, você prefere criar do seu jeito?"),
    (194, S, E, "Em um colega com problema, você prefere apoiar e acolher pessoas?"),
    (195, R, I, "Diante de um problema com múltiplas causas, você prefere agir na prática primeiro?"),
    (196, S, E, "Em uma situação emocional delicada, você prefere apoiar e acolher pessoas?"),
    (197, E, S, "Em uma apresentação para público, você prefere liderar para alcançar resultados?"),
    (198, R, I, "Diante de um imprevisto no dia a dia, você prefere agir na prática primeiro?"),
    (199, A, C, "Para um projeto criativo, você prefere criar do seu jeito?"),
    (200, R, I, "Diante de um procedimento que precisa melhorar, você prefere agir na prática primeiro?"),
    (201, E, S, "Em uma comunidade precisando de apoio, você prefere liderar para alcançar resultados?"),
    (202, A, C, "Para um conteúdo para redes, você prefere criar do seu jeito?"),
    (203, S, E, "Em uma equipe com dificuldades, você prefere apoiar e acolher pessoas?"),
    (204, I, R, "Diante de um obstáculo inesperado, você prefere analisar antes de agir?"),
    (205, S, E, "Em uma apresentação para público, você prefere apoiar e acolher pessoas?"),
    (206, R, I, "Diante de um resultado abaixo do esperado, você prefere agir na prática primeiro?"),
    (207, E, S, "Em um objetivo agressivo, você prefere liderar para alcançar resultados?"),
    (208, S, E, "Em uma turma aprendendo, você prefere apoiar e acolher pessoas?"),
    (209, A, C, "Para uma apresentação, você prefere criar do seu jeito?"),
    (210, E, S, "Em um ambiente competitivo, você prefere liderar para alcançar resultados?"),
    (211, I, R, "Diante de uma decisão técnica, você prefere analisar antes de agir?"),
    (212, A, C, "Para um cartaz, você prefere criar do seu jeito?"),
    (213, R, I, "Diante de um erro em um processo, você prefere agir na prática primeiro?"),
    (214, I, R, "Diante de um equipamento com defeito, você prefere analisar antes de agir?"),
    (215, I, R, "Diante de um sistema que não funciona, você prefere analisar antes de agir?"),
    (216, E, S, "Em um grupo desmotivado, você prefere liderar para alcançar resultados?"),
    (217, C, A, "Para um vídeo curto, você prefere seguir um padrão pronto?"),
    (218, S, E, "Em uma decisão que afeta pessoas, você prefere apoiar e acolher pessoas?"),
    (219, A, C, "Para um design de produto, você prefere criar do seu jeito?"),
    (220, R, I, "Diante de uma dúvida técnica, você prefere agir na prática primeiro?"),
    (221, I, R, "Diante de um imprevisto no dia a dia, você prefere analisar antes de agir?"),
    (222, E, S, "Em um colega com problema, você prefere liderar para alcançar resultados?"),
    (223, A, C, "Para um texto curto, você prefere criar do seu jeito?"),
    (224, S, E, "Em um atendimento difícil, você prefere apoiar e acolher pessoas?"),
    (225, I, R, "Diante de um desafio no trabalho, você prefere analisar antes de agir?"),
    (226, I, R, "Diante de um procedimento que precisa melhorar, você prefere analisar antes de agir?"),
    (227, C, A, "Para um convite, você prefere seguir um padrão pronto?"),
    (228, R, I, "Diante de uma falha recorrente, você prefere agir na prática primeiro?"),
    (229, C, A, "Para um nome ou slogan, você prefere seguir um padrão pronto?"),
    (230, E, S, "Em um cliente indeciso, você prefere liderar para alcançar resultados?"),
    (231, E, S, "Em uma negociação tensa, você prefere liderar para alcançar resultados?"),
    (232, S, E, "Em um projeto com muita gente, você prefere apoiar e acolher pessoas?"),
    (233, C, A, "Para um conceito, você prefere seguir um padrão pronto?"),
    (234, S, E, "Em uma meta urgente, você prefere apoiar e acolher pessoas?"),
    (235, R, I, "Diante de uma quebra de padrão, você prefere agir na prática primeiro?"),
    (236, R, I, "Diante de uma tarefa operacional, você prefere agir na prática primeiro?"),
    (237, I, R, "Diante de um alerta de qualidade, você prefere analisar antes de agir?"),
    (238, C, A, "Para um portfólio, você prefere seguir um padrão pronto?"),
    (239, R, I, "Diante de uma inconformidade, você prefere agir na prática primeiro?"),
    (240, A, C, "Para uma campanha, você prefere criar do seu jeito?"),
    (241, C, A, "Para uma solução estética, você prefere seguir um padrão pronto?"),
    (242, C, A, "Para um material visual, você prefere seguir um padrão pronto?"),
    (243, R, I, "Diante de um bug ou falha, você prefere agir na prática primeiro?"),
    (244, A, C, "Para uma identidade visual, você prefere criar do seu jeito?"),
    (245, S, E, "Em um novo integrante do time, você prefere apoiar e acolher pessoas?"),
    (246, A, C, "Para uma narrativa, você prefere criar do seu jeito?"),
    (247, E, S, "Em uma situação emocional delicada, você prefere liderar para alcançar resultados?"),
    (248, A, C, "Para uma proposta visual, você prefere criar do seu jeito?"),
    (249, R, I, "Diante de um problema técnico, você prefere agir na prática primeiro?"),
    (250, C, A, "Para um roteiro, você prefere seguir um padrão pronto?"),
    (251, A, C, "Para um vídeo curto, você prefere criar do seu jeito?"),
    (252, E, S, "Em uma turma aprendendo, você prefere liderar para alcançar resultados?"),
    (253, C, A, "Para uma narrativa, você prefere seguir um padrão pronto?"),
    (254, S, E, "Em um cliente indeciso, você prefere apoiar e acolher pessoas?"),
    (255, E, S, "Em uma pessoa insegura, você prefere liderar para alcançar resultados?"),
    (256, C, A, "Para um texto curto, você prefere seguir um padrão pronto?"),
    (257, I, R, "Diante de um equipamento que precisa ajuste, você prefere analisar antes de agir?"),
    (258, A, C, "Para um anúncio, você prefere criar do seu jeito?"),
    (259, A, C, "Para um projeto criativo, você prefere criar do seu jeito?"),
    (260, C, A, "Para um cartaz, você prefere seguir um padrão pronto?"),
    (261, I, R, "Diante de uma inconformidade, você prefere analisar antes de agir?"),
    (262, S, E, "Em uma comunidade precisando de apoio, você prefere apoiar e acolher pessoas?"),
    (263, I, R, "Diante de uma situação de manutenção, você prefere analisar antes de agir?"),
    (264, C, A, "Para um conteúdo para redes, você prefere seguir um padrão pronto?"),
    (265, E, S, "Em um projeto com muita gente, você prefere liderar para alcançar resultados?"),
    (266, R, I, "Diante de um desafio no trabalho, você prefere agir na prática primeiro?"),
    (267, E, S, "Em um grupo em conflito, você prefere liderar para alcançar resultados?"),
    (268, S, E, "Em um ambiente competitivo, você prefere apoiar e acolher pessoas?"),
    (269, A, C, "Para um nome ou slogan, você prefere criar do seu jeito?"),
    (270, I, R, "Diante de um ambiente com pressão, você prefere analisar antes de agir?"),
    (271, C, A, "Para um layout, você prefere seguir um padrão pronto?"),
    (272, I, R, "Diante de um caso que exige diagnóstico, você prefere analisar antes de agir?"),
    (273, A, C, "Para um material visual, você prefere criar do seu jeito?"),
    (274, C, A, "Para uma identidade visual, você prefere seguir um padrão pronto?"),
    (275, R, I, "Diante de um erro que precisa de causa raiz, você prefere agir na prática primeiro?"),
    (276, S, E, "Em um time que precisa de direção, você prefere apoiar e acolher pessoas?"),
    (277, S, E, "Em uma situação emocional delicada, você prefere apoiar e acolher pessoas?"),
    (278, R, I, "Diante de um problema com múltiplas causas, você prefere agir na prática primeiro?"),
    (279, R, I, "Diante de um trabalho com pouco tempo, você prefere agir na prática primeiro?"),
    (280, E, S, "Em uma equipe com dificuldades, você prefere liderar para alcançar resultados?"),
    (281, I, R, "Diante de uma tarefa operacional, você prefere analisar antes de agir?"),
    (282, S, E, "Em um colega com problema, você prefere apoiar e acolher pessoas?"),
    (283, A, C, "Para uma solução estética, você prefere criar do seu jeito?"),
    (284, S, E, "Em uma reunião importante, você prefere apoiar e acolher pessoas?"),
    (285, I, R, "Diante de um problema técnico, você prefere analisar antes de agir?"),
    (286, R, I, "Diante de um equipamento com defeito, você prefere agir na prática primeiro?"),
    (287, A, C, "Para um roteiro, você prefere criar do seu jeito?"),
    (288, R, I, "Diante de uma anomalia nos dados, você prefere agir na prática primeiro?"),
    (289, I, R, "Diante de uma quebra de padrão, você prefere analisar antes de agir?"),
    (290, R, I, "Diante de um alerta de qualidade, você prefere agir na prática primeiro?"),
    (291, A, C, "Para um convite, você prefere criar do seu jeito?"),
    (292, R, I, "Diante de uma decisão técnica, você prefere agir na prática primeiro?"),
    (293, C, A, "Para um design de produto, você prefere seguir um padrão pronto?"),
    (294, A, C, "Para um conceito, você prefere criar do seu jeito?"),
    (295, S, E, "Em uma negociação tensa, você prefere apoiar e acolher pessoas?"),
    (296, E, S, "Em um novo integrante do time, você prefere liderar para alcançar resultados?"),
    (297, E, S, "Em um atendimento difícil, você prefere liderar para alcançar resultados?"),
    (298, R, I, "Diante de um fluxo que precisa correção, você prefere agir na prática primeiro?"),
    (299, C, A, "Para uma apresentação, você prefere seguir um padrão pronto?"),
    (300, E, S, "Em uma apresentação para público, você prefere liderar para alcançar resultados?"),
];

/// Builds the default bank of binary questions.
pub fn default_questions() -> Vec<QuestionTemplate> {
    BANK.iter()
        .map(|&(id, yes_type, no_type, text)| QuestionTemplate::new(id, text, yes_type, no_type))
        .collect()
}
